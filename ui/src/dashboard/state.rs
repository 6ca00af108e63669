use api::{ChartDescriptor, ChatMessage, InsightSet, WeatherAverage};

/// Everything the dashboard shows, owned in one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Conversation log, oldest first. Only ever appended to.
    pub messages: Vec<ChatMessage>,
    pub descriptor: Option<ChartDescriptor>,
    pub insights: Option<InsightSet>,
    pub weather: Vec<WeatherAverage>,
    pub loading: bool,
    /// Blocking message the user has to dismiss.
    pub alert: Option<String>,
}

/// Where the dashboard is in its request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing analysed yet.
    Idle,
    Loading,
    /// A descriptor is on screen.
    Ready,
}

impl DashboardState {
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(greeting)],
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        match (self.loading, &self.descriptor) {
            (true, _) => Phase::Loading,
            (false, Some(_)) => Phase::Ready,
            (false, None) => Phase::Idle,
        }
    }

    /// The report button is only live with a chart on screen and no request in flight.
    pub fn can_export(&self) -> bool {
        self.descriptor.is_some() && !self.loading
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    #[test]
    fn greeting_seeds_one_assistant_message() {
        let state = DashboardState::with_greeting("hello");
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].role, Role::Assistant);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(!state.can_export());
    }

    #[test]
    fn phase_follows_loading_then_descriptor() {
        let mut state = DashboardState::default();
        state.loading = true;
        assert_eq!(state.phase(), Phase::Loading);

        state.descriptor = Some(ChartDescriptor::default());
        assert_eq!(state.phase(), Phase::Loading);
        assert!(!state.can_export());

        state.loading = false;
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.can_export());
    }
}
