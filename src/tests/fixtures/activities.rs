use crate::modules::activities::core::activity::Activity;

pub fn make_soccer_team() -> Activity {
    Activity {
        name: "Soccer Team".into(),
        description: "Join the varsity soccer team and compete against other schools".into(),
        schedule: "Mondays, Wednesdays, Fridays, 4:00 PM - 6:00 PM".into(),
        max_participants: 25,
        participants: vec!["alex@mergington.edu".into(), "sarah@mergington.edu".into()],
    }
}
