use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;

pub struct UnregisterFromActivityBuilder {
    inner: UnregisterFromActivity,
}

impl Default for UnregisterFromActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UnregisterFromActivityBuilder {
    /// Defaults to a seeded participant, so the command succeeds against a fresh store.
    pub fn new() -> Self {
        Self {
            inner: UnregisterFromActivity {
                activity_name: "Soccer Team".to_string(),
                email: "alex@mergington.edu".to_string(),
            },
        }
    }

    pub fn activity_name(mut self, v: impl Into<String>) -> Self {
        self.inner.activity_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> UnregisterFromActivity {
        self.inner
    }
}
