use super::delivery::{Delivery, DeliveryInput, DismissalKind, ExtraType};
use super::state::{InningsId, PlayerId};

/// Builder for deliveries in fixtures, demo data and test scenarios.
///
/// Defaults to innings 1, striker 1, non-striker 2, bowler 11, a dot ball.
#[derive(Debug, Clone)]
pub struct DeliveryFixture {
    input: DeliveryInput,
}

impl DeliveryFixture {
    pub const STRIKER: PlayerId = 1;
    pub const NON_STRIKER: PlayerId = 2;
    pub const BOWLER: PlayerId = 11;

    /// Delivery at 0-based `over` and 1-based `ball`.
    pub fn at(over: u32, ball: u8) -> Self {
        Self {
            input: DeliveryInput {
                innings_id: 1,
                over_number: over,
                ball_number: ball,
                batsman_id: Some(Self::STRIKER),
                non_striker_id: Some(Self::NON_STRIKER),
                bowler_id: Some(Self::BOWLER),
                ..DeliveryInput::default()
            },
        }
    }

    pub fn innings(mut self, innings_id: InningsId) -> Self {
        self.input.innings_id = innings_id;
        self
    }

    pub fn sequence(mut self, sequence: u32) -> Self {
        self.input.sequence = Some(sequence);
        self
    }

    pub fn batters(mut self, striker: PlayerId, non_striker: PlayerId) -> Self {
        self.input.batsman_id = Some(striker);
        self.input.non_striker_id = Some(non_striker);
        self
    }

    pub fn bowler(mut self, bowler: PlayerId) -> Self {
        self.input.bowler_id = Some(bowler);
        self
    }

    pub fn runs(mut self, runs: u8) -> Self {
        self.input.runs = runs;
        self
    }

    pub fn extra(mut self, extra_type: ExtraType, extras: u8) -> Self {
        self.input.extra_type = extra_type;
        self.input.extras = extras;
        self
    }

    pub fn wicket(
        mut self,
        kind: DismissalKind,
        player_out: Option<PlayerId>,
        fielder: Option<PlayerId>,
    ) -> Self {
        self.input.is_wicket = true;
        self.input.wicket_type = Some(kind);
        self.input.dismissed_player_id = player_out;
        self.input.fielder_id = fielder;
        self
    }

    pub fn commentary(mut self, text: impl Into<String>) -> Self {
        self.input.commentary = Some(text.into());
        self
    }

    /// The unvalidated wire record.
    pub fn input(self) -> DeliveryInput {
        self.input
    }

    /// Validate into a [`Delivery`].
    ///
    /// Fixtures are written to be valid; an invalid one is a bug in the
    /// fixture itself.
    pub fn build(self) -> Delivery {
        #[allow(clippy::expect_used)]
        Delivery::try_from(self.input).expect("fixture delivery is valid")
    }
}
