use crate::modules::activities::core::activity::Activity;
use serde::Serialize;

/// Read model of one activity. The name is the key of the listing, not a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    #[serde(skip_serializing)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityView {
    fn from(activity: Activity) -> Self {
        Self {
            name: activity.name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            participants: activity.participants,
        }
    }
}

#[cfg(test)]
mod activity_view_tests {
    use super::*;
    use crate::tests::fixtures::activities::make_soccer_team;
    use rstest::rstest;

    #[rstest]
    fn it_should_serialize_without_the_name() {
        let view = ActivityView::from(make_soccer_team());
        assert_eq!(view.name, "Soccer Team");
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            serde_json::json!({
                "description": "Join the varsity soccer team and compete against other schools",
                "schedule": "Mondays, Wednesdays, Fridays, 4:00 PM - 6:00 PM",
                "max_participants": 25,
                "participants": ["alex@mergington.edu", "sarah@mergington.edu"],
            })
        );
    }
}
