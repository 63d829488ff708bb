// The contact form has no transport: "sending" is a timed state change.

pub const SEND_DELAY_MS: u32 = 1500;
pub const NOTICE_MS: u32 = 5000;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub submission: Submission,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

impl ContactState {
    pub fn edit(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.form.name,
            Field::Email => &mut self.form.email,
            Field::Message => &mut self.form.message,
        };
        *slot = value;
    }

    /// Starts sending. Returns `false` when already sending or a field is blank.
    pub fn submit(&mut self) -> bool {
        if self.is_submitting() || !self.form.is_complete() {
            return false;
        }
        self.submission = Submission::Submitting;
        true
    }

    /// The simulated send finished: clear the fields and show the notice.
    pub fn delivered(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.form = ContactForm::default();
        self.submission = Submission::Submitted;
        true
    }

    pub fn dismiss_notice(&mut self) -> bool {
        if self.submission != Submission::Submitted {
            return false;
        }
        self.submission = Submission::Idle;
        true
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    pub fn show_notice(&self) -> bool {
        self.submission == Submission::Submitted
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::default();
        state.edit(Field::Name, "Ada".into());
        state.edit(Field::Email, "ada@example.com".into());
        state.edit(Field::Message, "Hello there".into());
        state
    }

    #[test]
    fn full_cycle_clears_fields_and_notice() {
        let mut state = filled();

        assert!(state.submit());
        assert!(state.is_submitting());
        assert_eq!(state.button_label(), "Sending...");

        assert!(state.delivered());
        assert_eq!(state.form, ContactForm::default());
        assert!(state.show_notice());
        assert_eq!(state.button_label(), "Send Message");

        assert!(state.dismiss_notice());
        assert_eq!(state, ContactState::default());
    }

    #[test]
    fn blank_fields_block_submission() {
        let mut state = filled();
        state.edit(Field::Message, "   ".into());

        assert!(!state.submit());
        assert_eq!(state.submission, Submission::Idle);
    }

    #[test]
    fn double_submit_is_ignored() {
        let mut state = filled();
        assert!(state.submit());
        assert!(!state.submit());
        assert!(state.is_submitting());
    }

    #[test]
    fn stray_timer_events_are_ignored() {
        let mut state = filled();
        assert!(!state.delivered());
        assert!(!state.dismiss_notice());
        assert_eq!(state, filled());
    }

    #[test]
    fn can_send_again_while_notice_is_shown() {
        let mut state = filled();
        state.submit();
        state.delivered();

        state.edit(Field::Name, "Grace".into());
        state.edit(Field::Email, "grace@example.com".into());
        state.edit(Field::Message, "Another one".into());

        assert!(state.submit());
        assert!(!state.show_notice());
    }
}
