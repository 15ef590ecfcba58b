use crate::modules::activities::core::events::ActivityEvent;

#[derive(Debug, PartialEq, Eq)]
pub enum Decision<TReason> {
    Accepted { events: Vec<ActivityEvent> },
    Rejected { reason: TReason },
}
