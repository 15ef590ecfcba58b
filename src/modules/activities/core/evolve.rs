use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::ActivityEvent;

pub fn evolve(mut activity: Activity, event: ActivityEvent) -> Activity {
    match event {
        ActivityEvent::ParticipantSignedUp { activity_name, email }
            if activity_name == activity.name =>
        {
            activity.participants.push(email);
        }
        ActivityEvent::ParticipantUnregistered { activity_name, email }
            if activity_name == activity.name =>
        {
            if let Some(index) = activity.participants.iter().position(|p| *p == email) {
                activity.participants.remove(index);
            }
        }
        _ => {}
    }
    activity
}
