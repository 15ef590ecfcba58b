use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;

pub struct SignUpForActivityBuilder {
    inner: SignUpForActivity,
}

impl Default for SignUpForActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SignUpForActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: SignUpForActivity {
                activity_name: "Soccer Team".to_string(),
                email: "newstudent@mergington.edu".to_string(),
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

    pub fn build(self) -> SignUpForActivity {
        self.inner
    }
}

#[cfg(test)]
mod sign_up_for_activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = SignUpForActivityBuilder::default()
            .activity_name("Chess Club")
            .email("custom@mergington.edu")
            .build();

        assert_eq!(custom.activity_name, "Chess Club");
        assert_eq!(custom.email, "custom@mergington.edu");
    }
}
