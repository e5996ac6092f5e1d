//! Builders shared by the renderer tests.

use chrono::{TimeZone, Utc};

use crate::models::resume::{Education, Experience, Project, Resume};

pub fn resume() -> Resume {
    Resume {
        id: "r1".into(),
        title: "Backend Engineer".into(),
        bio: Some("Builds services.".into()),
        email: Some("dev@example.com".into()),
        url: Some("https://example.com".into()),
        image: None,
        public: true,
        template: None,
        skills: vec!["Go".into(), "SQL".into()],
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(),
        educations: Vec::new(),
        experiences: Vec::new(),
        projects: Vec::new(),
    }
}

pub fn resume_with(edit: impl FnOnce(&mut Resume)) -> Resume {
    let mut resume = resume();
    edit(&mut resume);
    resume
}

pub fn experience(id: &str, company: &str, start: &str, end: &str) -> Experience {
    Experience {
        id: id.into(),
        company: company.into(),
        title: "Engineer".into(),
        location: None,
        start_date: start.into(),
        end_date: end.into(),
        description: "Built X".into(),
    }
}

pub fn project(id: &str, title: &str) -> Project {
    Project {
        id: id.into(),
        title: title.into(),
        start_date: "2021-01".into(),
        end_date: "2021-06".into(),
        description: String::new(),
        skills: Vec::new(),
        url: None,
    }
}

pub fn education(id: &str, school: &str) -> Education {
    Education {
        id: id.into(),
        school: school.into(),
        major: Some("Computer Science".into()),
        degree: Some("BSc".into()),
        start_date: "2014-03".into(),
        end_date: "2018-02".into(),
        gpa: None,
        activities: None,
    }
}
