//! Running balance tracked through a monthly projection

/// Compounding periods per projection year
pub const MONTHS_PER_YEAR: u32 = 12;

/// State of the projected balance at a point in time
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Months elapsed since the start (0 before the first update)
    pub projection_month: u32,

    /// Projection year the current month belongs to (1-indexed, 0 at start)
    pub year: u32,

    /// Month within the projection year (1-12, 0 at start)
    pub month_in_year: u32,

    /// Current balance
    pub balance: f64,

    /// Balance at the start of the current projection year
    pub year_start_balance: f64,
}

impl ProjectionState {
    /// Initialize state with the opening lump sum
    pub fn new(initial: f64) -> Self {
        Self {
            projection_month: 0,
            year: 0,
            month_in_year: 0,
            balance: initial,
            year_start_balance: initial,
        }
    }

    /// Grow the balance by one month of interest, then add the contribution
    pub fn advance_month(&mut self, monthly_rate: f64, contribution: f64) {
        self.projection_month += 1;
        self.year = (self.projection_month - 1) / MONTHS_PER_YEAR + 1;
        self.month_in_year = (self.projection_month - 1) % MONTHS_PER_YEAR + 1;

        // Opening balance of the year is captured before its first update
        if self.month_in_year == 1 {
            self.year_start_balance = self.balance;
        }

        self.balance = self.balance * (1.0 + monthly_rate) + contribution;
    }

    /// Whether the last update closed a projection year
    pub fn is_year_end(&self) -> bool {
        self.month_in_year == MONTHS_PER_YEAR
    }
}
