use crate::models::{FilterInput, RaceCategory};

const BASE_SCORE: f64 = 100.0;
const AGE_STEP: f64 = 0.025;
const INCOME_STEP: f64 = 0.0000025;
const HEIGHT_STEP: f64 = 0.1;
const FLAG_BONUS: f64 = 0.5;

/// Calculate the compatibility probability (0-1) for validated filters
///
/// Scoring formula, applied in this order on a 0-100 scale:
/// score = 100
///     - (max_age - 100) * -0.025     # wider age window helps
///     + (min_age - 18) * 0.025
///     - income_floor * 0.0000025     # higher income floor hurts
///     - (min_height - 5) * 0.1       # taller minimum hurts
///     + race_adjustment(race)
///     + 0.5 per accepted flag
/// then clamped to 0..=100, rounded to cents and divided by 100.
///
/// The order is fixed and the age term is left unsimplified so results are
/// bit-identical to the form's own arithmetic.
pub fn score(input: &FilterInput) -> f64 {
    normalize(raw_score(input))
}

/// Unclamped score on the 0-100 scale
pub fn raw_score(input: &FilterInput) -> f64 {
    let age = input.age_range();
    let height = input.height_range();

    let mut score = BASE_SCORE;

    // Stage 1: age
    score -= (f64::from(age.max) - 100.0) * -AGE_STEP;
    score += (f64::from(age.min) - 18.0) * AGE_STEP;

    // Stage 2: income
    score -= input.income_floor() * INCOME_STEP;

    // Stage 3: height
    score -= (height.min - 5.0) * HEIGHT_STEP;

    // Stage 4: race
    score += race_adjustment(input.race_category());

    // Stage 5: flags
    if input.marital_preference() {
        score += FLAG_BONUS;
    }
    if input.weight_preference() {
        score += FLAG_BONUS;
    }

    score
}

/// Score delta for each race category
#[inline]
pub fn race_adjustment(race: RaceCategory) -> f64 {
    match race {
        RaceCategory::White => -1.5,
        RaceCategory::Black => -0.8,
        RaceCategory::Asian => -0.35,
        RaceCategory::Any => -0.5,
        RaceCategory::Unset => 0.0,
    }
}

/// Clamp a raw 0-100 score, round it to cents and scale it to 0-1
#[inline]
pub fn normalize(raw: f64) -> f64 {
    let clamped = raw.min(BASE_SCORE).max(0.0);
    round_to_cents(clamped) / BASE_SCORE
}

/// Round to two decimals the way `Number.prototype.toFixed(2)` does: nearest
/// hundredth of the exact binary value, ties up.
///
/// Rust's formatter is also exact but breaks ties to even. An exact tie at the
/// third decimal is only representable at odd multiples of 1/8, so those are
/// rounded up directly.
fn round_to_cents(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && (value * 4.0).fract() != 0.0 {
        return (value * 100.0 + 0.5).floor() / 100.0;
    }

    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, HeightRange};

    fn create_test_input(
        age: (u8, u8),
        income: f64,
        min_height: f64,
        race: RaceCategory,
        married: bool,
        overweight: bool,
    ) -> FilterInput {
        FilterInput::new(
            AgeRange::new(age.0, age.1).unwrap(),
            income,
            HeightRange::new(min_height, 7.0).unwrap(),
            race,
            married,
            overweight,
        )
        .unwrap()
    }

    #[test]
    fn test_default_form_scores_099() {
        let input = create_test_input((18, 85), 70_000.0, 4.5, RaceCategory::Any, false, false);
        assert_eq!(score(&input), 0.99);
    }

    #[test]
    fn test_ceiling_clamp() {
        let input = create_test_input((85, 85), 0.0, 4.0, RaceCategory::White, true, true);
        assert!(raw_score(&input) > 100.0);
        assert_eq!(score(&input), 1.0);
    }

    #[test]
    fn test_floor_clamp() {
        assert_eq!(normalize(-3.2), 0.0);
        assert_eq!(normalize(f64::MIN), 0.0);
        assert_eq!(normalize(250.0), 1.0);
    }

    #[test]
    fn test_race_table() {
        assert_eq!(race_adjustment(RaceCategory::White), -1.5);
        assert_eq!(race_adjustment(RaceCategory::Black), -0.8);
        assert_eq!(race_adjustment(RaceCategory::Asian), -0.35);
        assert_eq!(race_adjustment(RaceCategory::Any), -0.5);
        assert_eq!(race_adjustment(RaceCategory::Unset), 0.0);
    }

    #[test]
    fn test_flags_add_half_point_each() {
        let none = create_test_input((30, 60), 100_000.0, 5.5, RaceCategory::Asian, false, false);
        let one = create_test_input((30, 60), 100_000.0, 5.5, RaceCategory::Asian, true, false);
        let both = create_test_input((30, 60), 100_000.0, 5.5, RaceCategory::Asian, true, true);

        assert!((raw_score(&one) - raw_score(&none) - 0.5).abs() < 1e-9);
        assert!((raw_score(&both) - raw_score(&none) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_to_cents_ties_go_up() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(98.375), 98.38);
        assert_eq!(round_to_cents(98.625), 98.63);
        assert_eq!(round_to_cents(99.5), 99.5);
    }

    #[test]
    fn test_round_to_cents_uses_exact_value() {
        // 1.005 is stored just below 1.005, so it rounds down like toFixed does
        assert_eq!(round_to_cents(1.005), 1.0);
        assert_eq!(round_to_cents(96.674), 96.67);
        assert_eq!(round_to_cents(100.0), 100.0);
    }
}
