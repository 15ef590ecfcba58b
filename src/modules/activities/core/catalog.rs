// Seed catalog loaded into the registry at process start.
//
// Activities are never created or deleted at runtime; only their participant
// lists change.

use crate::modules::activities::core::activity::Activity;

fn activity(
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        name: name.to_string(),
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn seed_activities() -> Vec<Activity> {
    vec![
        activity(
            "Soccer Team",
            "Join the varsity soccer team and compete against other schools",
            "Mondays, Wednesdays, Fridays, 4:00 PM - 6:00 PM",
            25,
            &["alex@mergington.edu", "sarah@mergington.edu"],
        ),
        activity(
            "Basketball Club",
            "Practice basketball skills and participate in friendly matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            15,
            &["james@mergington.edu"],
        ),
        activity(
            "Art Studio",
            "Explore various art techniques including painting, drawing, and sculpture",
            "Wednesdays, 3:30 PM - 5:30 PM",
            18,
            &["lily@mergington.edu", "mia@mergington.edu"],
        ),
        activity(
            "Drama Club",
            "Perform in school plays and learn acting, directing, and stagecraft",
            "Mondays and Thursdays, 3:30 PM - 5:00 PM",
            20,
            &["ethan@mergington.edu"],
        ),
        activity(
            "Debate Team",
            "Develop critical thinking and public speaking through competitive debates",
            "Tuesdays, 4:00 PM - 5:30 PM",
            16,
            &["noah@mergington.edu", "ava@mergington.edu"],
        ),
        activity(
            "Science Olympiad",
            "Compete in scientific challenges and experiments at regional competitions",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            20,
            &["lucas@mergington.edu"],
        ),
        activity(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        activity(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        activity(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
    ]
}
