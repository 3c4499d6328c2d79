//! The seven factor assessments.
//!
//! Each assessment is a pure function of a few applicant or loan inputs and
//! returns a 0-100 score (higher is safer) together with the warnings it raised.

/// Reference monthly minimum wage used to express income in wage units.
pub const MINIMUM_MONTHLY_WAGE: f64 = 1_300_000.0;

/// Warning texts raised by the factor assessments.
pub mod warnings {
    pub const BELOW_AVERAGE_CREDIT_SCORE: &str = "Credit score below average";
    pub const VERY_LOW_CREDIT_SCORE: &str = "Very low credit score - high risk";
    pub const ONE_PREVIOUS_DEFAULT: &str = "One previous default on record";
    pub const TWO_PREVIOUS_DEFAULTS: &str = "Multiple previous defaults";
    pub const REPEATED_DEFAULTS: &str = "History of repeated defaults - critical risk";

    pub const HIGH_PAYMENT_RATIO: &str = "Monthly payment takes a high share of income";
    pub const EXCESSIVE_PAYMENT_RATIO: &str =
        "Monthly payment excessive relative to income - very high risk";
    pub const LOW_INCOME: &str = "Low income for the requested amount";
    pub const MANY_DEPENDENTS: &str = "High number of dependents reduces payment capacity";

    pub const ELEVATED_DEBT: &str = "Elevated existing debt level";
    pub const HIGH_DEBT: &str = "High existing debt level";
    pub const CRITICAL_DEBT: &str = "Critical existing debt level";

    pub const LIMITED_EXPERIENCE: &str = "Limited agricultural experience increases risk";
    pub const LOW_PRODUCTIVITY: &str = "Low productivity per hectare";
    pub const NO_INSURANCE: &str = "No agricultural insurance - exposed to climate risk";

    pub const YOUNG_APPLICANT: &str = "Young age may indicate lack of experience";
    pub const ADVANCED_AGE: &str = "Advanced age may affect working capacity";

    pub const NO_COLLATERAL: &str = "No real collateral - higher risk for the lender";
    pub const PARTIAL_COLLATERAL: &str = "Collateral does not fully cover the requested amount";
    pub const LOW_COLLATERAL: &str = "Low collateral relative to the requested amount";
    pub const VERY_LOW_COLLATERAL: &str = "Very low collateral relative to the requested amount";

    pub const HIGH_AMOUNT_TO_INCOME: &str = "High amount relative to income";
    pub const VERY_HIGH_AMOUNT_TO_INCOME: &str = "Very high amount relative to income capacity";
    pub const SHORT_TERM: &str = "Very short term raises the monthly burden";
    pub const LONG_TERM: &str = "Very long term increases default risk";
    pub const LOW_CONTRIBUTION: &str = "Low own contribution increases risk";
}

/// Outcome of one factor assessment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FactorAssessment {
    pub score: f64,
    pub warnings: Vec<&'static str>,
}

impl FactorAssessment {
    fn add(&mut self, points: f64) {
        self.score += points;
    }

    fn warn(&mut self, points: f64, warning: &'static str) {
        self.score += points;
        self.warnings.push(warning);
    }

    fn capped(mut self) -> Self {
        self.score = self.score.min(100.0);
        self
    }
}

/// Credit bureau score plus default history.
pub fn credit_history(credit_score: u32, previous_defaults: u32) -> FactorAssessment {
    let mut out = FactorAssessment::default();

    match credit_score {
        750.. => out.add(80.0),
        700..=749 => out.add(68.0),
        650..=699 => out.add(52.0),
        600..=649 => out.add(36.0),
        550..=599 => out.warn(20.0, warnings::BELOW_AVERAGE_CREDIT_SCORE),
        _ => out.warn(4.0, warnings::VERY_LOW_CREDIT_SCORE),
    }

    match previous_defaults {
        0 => out.add(20.0),
        1 => out.warn(12.0, warnings::ONE_PREVIOUS_DEFAULT),
        2 => out.warn(4.0, warnings::TWO_PREVIOUS_DEFAULTS),
        _ => out.warn(0.0, warnings::REPEATED_DEFAULTS),
    }

    out.capped()
}

/// Share of monthly income consumed by the payment, income in wage units,
/// and household size.
pub fn payment_capacity(
    annual_income: f64,
    other_income: f64,
    monthly_payment: f64,
    dependents: u32,
) -> FactorAssessment {
    let mut out = FactorAssessment::default();
    let monthly_income = (annual_income + other_income) / 12.0;

    let payment_ratio = if monthly_income > 0.0 {
        monthly_payment / monthly_income
    } else {
        1.0
    };
    if payment_ratio <= 0.2 {
        out.add(60.0);
    } else if payment_ratio <= 0.3 {
        out.add(50.0);
    } else if payment_ratio <= 0.4 {
        out.add(35.0);
    } else if payment_ratio <= 0.5 {
        out.warn(20.0, warnings::HIGH_PAYMENT_RATIO);
    } else {
        out.warn(5.0, warnings::EXCESSIVE_PAYMENT_RATIO);
    }

    let wage_units = monthly_income / MINIMUM_MONTHLY_WAGE;
    if wage_units >= 10.0 {
        out.add(25.0);
    } else if wage_units >= 5.0 {
        out.add(20.0);
    } else if wage_units >= 3.0 {
        out.add(15.0);
    } else if wage_units >= 2.0 {
        out.add(10.0);
    } else {
        out.warn(5.0, warnings::LOW_INCOME);
    }

    match dependents {
        0 => out.add(15.0),
        1..=2 => out.add(10.0),
        3..=4 => out.add(5.0),
        _ => out.warn(0.0, warnings::MANY_DEPENDENTS),
    }

    out.capped()
}

/// Existing debt-to-income ratio.
pub fn debt_burden(debt_to_income_ratio: f64) -> FactorAssessment {
    let mut out = FactorAssessment::default();
    if debt_to_income_ratio <= 0.2 {
        out.add(100.0);
    } else if debt_to_income_ratio <= 0.3 {
        out.add(80.0);
    } else if debt_to_income_ratio <= 0.4 {
        out.warn(53.0, warnings::ELEVATED_DEBT);
    } else if debt_to_income_ratio <= 0.5 {
        out.warn(27.0, warnings::HIGH_DEBT);
    } else {
        out.warn(7.0, warnings::CRITICAL_DEBT);
    }
    out.capped()
}

/// Farming experience, productivity per hectare and crop insurance.
pub fn agricultural_profile(
    experience_years: u32,
    farm_size_hectares: f64,
    has_insurance: bool,
    annual_income: f64,
) -> FactorAssessment {
    let mut out = FactorAssessment::default();

    match experience_years {
        15.. => out.add(42.0),
        10..=14 => out.add(33.0),
        5..=9 => out.add(25.0),
        2..=4 => out.add(13.0),
        _ => out.warn(4.0, warnings::LIMITED_EXPERIENCE),
    }

    let income_per_hectare = if farm_size_hectares > 0.0 {
        annual_income / farm_size_hectares
    } else {
        0.0
    };
    if income_per_hectare >= 5_000_000.0 {
        out.add(33.0);
    } else if income_per_hectare >= 3_000_000.0 {
        out.add(25.0);
    } else if income_per_hectare >= 2_000_000.0 {
        out.add(17.0);
    } else if income_per_hectare >= 1_000_000.0 {
        out.add(8.0);
    } else {
        out.warn(4.0, warnings::LOW_PRODUCTIVITY);
    }

    if has_insurance {
        out.add(25.0);
    } else {
        out.warn(0.0, warnings::NO_INSURANCE);
    }

    out.capped()
}

/// Applicant age in whole years.
pub fn demographics(age: i32) -> FactorAssessment {
    let mut out = FactorAssessment::default();
    if (30..=55).contains(&age) {
        out.add(100.0);
    } else if (25..=65).contains(&age) {
        out.add(75.0);
    } else if (18..=70).contains(&age) {
        out.add(50.0);
    } else if age < 25 {
        out.warn(25.0, warnings::YOUNG_APPLICANT);
    } else {
        out.warn(25.0, warnings::ADVANCED_AGE);
    }
    out
}

/// Collateral coverage of the requested amount.
pub fn collateral(collateral_value: Option<f64>, requested_amount: f64) -> FactorAssessment {
    let mut out = FactorAssessment::default();

    let value = match collateral_value {
        Some(v) if v > 0.0 => v,
        _ => {
            out.warn(0.0, warnings::NO_COLLATERAL);
            return out;
        }
    };

    let coverage = if requested_amount > 0.0 {
        value / requested_amount
    } else {
        0.0
    };
    if coverage >= 1.5 {
        out.add(100.0);
    } else if coverage >= 1.2 {
        out.add(80.0);
    } else if coverage >= 1.0 {
        out.add(60.0);
    } else if coverage >= 0.8 {
        out.warn(40.0, warnings::PARTIAL_COLLATERAL);
    } else if coverage >= 0.5 {
        out.warn(20.0, warnings::LOW_COLLATERAL);
    } else {
        out.warn(10.0, warnings::VERY_LOW_COLLATERAL);
    }
    out
}

/// Amount relative to income, term length and own contribution.
pub fn loan_characteristics(
    requested_amount: f64,
    term_months: u32,
    annual_income: f64,
    contribution: f64,
) -> FactorAssessment {
    let mut out = FactorAssessment::default();

    let amount_to_income = if annual_income > 0.0 {
        requested_amount / annual_income
    } else {
        f64::INFINITY
    };
    if amount_to_income <= 2.0 {
        out.add(50.0);
    } else if amount_to_income <= 3.0 {
        out.add(35.0);
    } else if amount_to_income <= 5.0 {
        out.warn(20.0, warnings::HIGH_AMOUNT_TO_INCOME);
    } else {
        out.warn(5.0, warnings::VERY_HIGH_AMOUNT_TO_INCOME);
    }

    match term_months {
        12..=60 => out.add(30.0),
        6..=120 => out.add(20.0),
        t if t < 12 => out.warn(10.0, warnings::SHORT_TERM),
        _ => out.warn(10.0, warnings::LONG_TERM),
    }

    let contribution_ratio = if requested_amount > 0.0 {
        contribution / requested_amount
    } else {
        0.0
    };
    if contribution_ratio >= 0.3 {
        out.add(20.0);
    } else if contribution_ratio >= 0.2 {
        out.add(15.0);
    } else if contribution_ratio >= 0.1 {
        out.add(10.0);
    } else {
        out.warn(0.0, warnings::LOW_CONTRIBUTION);
    }

    out.capped()
}
