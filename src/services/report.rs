use fastrand::Rng;

use crate::models::{QuestionnaireAnswers, Severity, TestReport};

pub const MIN_SCORE: i32 = 30;
pub const MAX_SCORE: i32 = 80;

const KEY_FINDINGS_POOL: [&str; 9] = [
    "Noticeable thinning in the crown area.",
    "The scalp appears to be in good condition, with no visible irritation.",
    "Some dryness and flakiness is visible on the scalp.",
    "Hair appears to be well-hydrated and has good elasticity.",
    "A moderate amount of dandruff flakes were observed across the scalp.",
    "No significant inflammation or redness was detected.",
    "Hair follicles appear open and are not clogged.",
    "The hair seems brittle and prone to breakage.",
    "Scalp oiliness is within a normal range.",
];

const RECOMMENDATIONS_POOL: [&str; 8] = [
    "Ensure a diet rich in iron, zinc, and B-vitamins to support hair growth.",
    "Incorporate regular scalp massages to improve blood circulation to the follicles.",
    "Avoid harsh chemical treatments and excessive heat styling for a few weeks.",
    "Switch to a gentle, sulfate-free shampoo to avoid stripping natural oils.",
    "Consider using a silk or satin pillowcase to reduce hair friction and breakage overnight.",
    "Stay hydrated by drinking an adequate amount of water throughout the day.",
    "Look into mindfulness or meditation to help manage stress levels.",
    "A weekly deep conditioning treatment could improve hair moisture.",
];

const ITCHY_FLAKY_FINDING: &str =
    "The scalp is reported as Itchy or flaky, which may be a contributing factor to hair health.";

const MINOXIDIL_RECOMMENDATION: &str =
    "For hair loss concerns, consider a topical minoxidil treatment after consulting a specialist.";

const NUTRITIONIST_RECOMMENDATION: &str =
    "Your diet may be impacting your hair. Consulting a nutritionist for a personalized plan is highly recommended.";

const DIAGNOSIS_GENERAL: &str = "General hair health analysis.";
const DIAGNOSIS_FAMILY_HISTORY: &str =
    "Potential for Androgenetic Alopecia based on family history.";
const DIAGNOSIS_STRESS_SHEDDING: &str =
    "Telogen Effluvium (stress-related shedding) is a possibility based on your concerns.";

/// Generates an analysis report for one questionnaire submission.
///
/// Deliberately non-deterministic: the caller injects the generator, so two
/// identical answer sets produce different reports in production while tests
/// pin a seed. Unknown or missing answer keys read as absent and never fail.
pub fn synthesize(answers: &QuestionnaireAnswers, rng: &mut Rng) -> TestReport {
    let score = rng.i32(MIN_SCORE..=MAX_SCORE);

    let sample_size = rng.usize(2..=4);
    let mut key_findings: Vec<String> = rng
        .choose_multiple(KEY_FINDINGS_POOL.iter().copied(), sample_size)
        .into_iter()
        .map(str::to_string)
        .collect();

    if answers.text("scalp_condition") == Some("Itchy or flaky") {
        key_findings.push(ITCHY_FLAKY_FINDING.to_string());
    }
    if let Some(stress) = answers.text("stress_level")
        && (stress == "Very stressed" || stress == "Moderately stressed")
    {
        key_findings.push(format!(
            "Reported stress level is {stress}, which can impact hair health."
        ));
    }

    let concern_mentions_hair_loss = answers
        .text("main_hair_concern")
        .is_some_and(|concern| concern.to_lowercase().contains("hair loss"));

    // Family history outranks concern-text matching.
    let diagnosis = if answers.text("family_hair_loss_history") == Some("Yes") {
        DIAGNOSIS_FAMILY_HISTORY
    } else if concern_mentions_hair_loss {
        DIAGNOSIS_STRESS_SHEDDING
    } else {
        DIAGNOSIS_GENERAL
    };

    let sample_size = rng.usize(2..=3);
    let mut recommendations: Vec<String> = rng
        .choose_multiple(RECOMMENDATIONS_POOL.iter().copied(), sample_size)
        .into_iter()
        .map(str::to_string)
        .collect();

    if concern_mentions_hair_loss {
        recommendations.push(MINOXIDIL_RECOMMENDATION.to_string());
    }
    if answers.text("diet") == Some("Poor (skips meals, low nutrients)") {
        recommendations.push(NUTRITIONIST_RECOMMENDATION.to_string());
    }

    TestReport {
        severity: Severity::from_score(score),
        key_findings: dedup_preserving_order(key_findings),
        diagnosis: diagnosis.to_string(),
        recommendations: dedup_preserving_order(recommendations),
        score,
    }
}

/// Collapses duplicates while keeping first-occurrence order, so conditional
/// entries stay after the sampled ones.
fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> QuestionnaireAnswers {
        let mut answers = QuestionnaireAnswers::default();
        for (key, value) in pairs {
            answers.set(*key, *value);
        }
        answers
    }

    fn has_duplicates(items: &[String]) -> bool {
        (1..items.len()).any(|i| items[i..].contains(&items[i - 1]))
    }

    #[test]
    fn test_score_always_in_range() {
        let empty = QuestionnaireAnswers::default();
        for seed in 0..500 {
            let mut rng = Rng::with_seed(seed);
            let report = synthesize(&empty, &mut rng);
            assert!(
                (MIN_SCORE..=MAX_SCORE).contains(&report.score),
                "seed {seed} produced out-of-range score {}",
                report.score
            );
        }
    }

    #[test]
    fn test_severity_matches_score() {
        let empty = QuestionnaireAnswers::default();
        for seed in 0..500 {
            let mut rng = Rng::with_seed(seed);
            let report = synthesize(&empty, &mut rng);
            let expected = match report.score {
                s if s < 50 => Severity::Severe,
                s if s < 70 => Severity::Moderate,
                _ => Severity::Mild,
            };
            assert_eq!(report.severity, expected, "seed {seed}, score {}", report.score);
        }
    }

    #[test]
    fn test_findings_and_recommendations_non_empty_and_unique() {
        let loaded = answers(&[
            ("scalp_condition", "Itchy or flaky"),
            ("stress_level", "Very stressed"),
            ("main_hair_concern", "Hair loss"),
            ("diet", "Poor (skips meals, low nutrients)"),
        ]);
        for seed in 0..500 {
            let mut rng = Rng::with_seed(seed);
            let report = synthesize(&loaded, &mut rng);
            assert!(!report.key_findings.is_empty());
            assert!(!report.recommendations.is_empty());
            assert!(!has_duplicates(&report.key_findings), "seed {seed}");
            assert!(!has_duplicates(&report.recommendations), "seed {seed}");
        }
    }

    #[test]
    fn test_family_history_outranks_concern() {
        let both = answers(&[
            ("family_hair_loss_history", "Yes"),
            ("main_hair_concern", "Severe hair loss"),
        ]);
        let mut rng = Rng::with_seed(7);
        let report = synthesize(&both, &mut rng);
        assert_eq!(report.diagnosis, DIAGNOSIS_FAMILY_HISTORY);
    }

    #[test]
    fn test_concern_matching_is_case_insensitive() {
        let concerned = answers(&[("main_hair_concern", "Sudden HAIR LOSS at the temples")]);
        let mut rng = Rng::with_seed(7);
        let report = synthesize(&concerned, &mut rng);
        assert_eq!(report.diagnosis, DIAGNOSIS_STRESS_SHEDDING);
        assert!(report.recommendations.contains(&MINOXIDIL_RECOMMENDATION.to_string()));
    }

    #[test]
    fn test_no_matching_answers_yields_generic_diagnosis() {
        let unrelated = answers(&[
            ("family_hair_loss_history", "No"),
            ("main_hair_concern", "Split ends"),
        ]);
        let mut rng = Rng::with_seed(7);
        let report = synthesize(&unrelated, &mut rng);
        assert_eq!(report.diagnosis, DIAGNOSIS_GENERAL);
    }

    #[test]
    fn test_empty_answers_yield_generic_diagnosis() {
        let mut rng = Rng::with_seed(7);
        let report = synthesize(&QuestionnaireAnswers::default(), &mut rng);
        assert_eq!(report.diagnosis, DIAGNOSIS_GENERAL);
        assert!(!report.recommendations.contains(&MINOXIDIL_RECOMMENDATION.to_string()));
        assert!(!report.recommendations.contains(&NUTRITIONIST_RECOMMENDATION.to_string()));
    }

    #[test]
    fn test_itchy_scalp_adds_finding() {
        let itchy = answers(&[("scalp_condition", "Itchy or flaky")]);
        for seed in 0..50 {
            let mut rng = Rng::with_seed(seed);
            let report = synthesize(&itchy, &mut rng);
            assert!(
                report.key_findings.contains(&ITCHY_FLAKY_FINDING.to_string()),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_stress_finding_interpolates_reported_level() {
        for level in ["Very stressed", "Moderately stressed"] {
            let stressed = answers(&[("stress_level", level)]);
            let mut rng = Rng::with_seed(11);
            let report = synthesize(&stressed, &mut rng);
            let expected = format!("Reported stress level is {level}, which can impact hair health.");
            assert!(report.key_findings.contains(&expected));
        }
    }

    #[test]
    fn test_relaxed_stress_adds_no_finding() {
        let relaxed = answers(&[("stress_level", "Not stressed")]);
        let mut rng = Rng::with_seed(11);
        let report = synthesize(&relaxed, &mut rng);
        assert!(!report.key_findings.iter().any(|f| f.starts_with("Reported stress level")));
    }

    #[test]
    fn test_poor_diet_adds_nutritionist_recommendation() {
        let poor_diet = answers(&[("diet", "Poor (skips meals, low nutrients)")]);
        for seed in 0..50 {
            let mut rng = Rng::with_seed(seed);
            let report = synthesize(&poor_diet, &mut rng);
            assert!(
                report.recommendations.contains(&NUTRITIONIST_RECOMMENDATION.to_string()),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_sampled_counts_within_catalog_bounds() {
        let empty = QuestionnaireAnswers::default();
        for seed in 0..200 {
            let mut rng = Rng::with_seed(seed);
            let report = synthesize(&empty, &mut rng);
            assert!((2..=4).contains(&report.key_findings.len()), "seed {seed}");
            assert!((2..=3).contains(&report.recommendations.len()), "seed {seed}");
        }
    }

    #[test]
    fn test_same_seed_reproduces_report() {
        let loaded = answers(&[("main_hair_concern", "Hair loss"), ("stress_level", "Very stressed")]);
        let mut first_rng = Rng::with_seed(42);
        let mut second_rng = Rng::with_seed(42);
        assert_eq!(
            synthesize(&loaded, &mut first_rng),
            synthesize(&loaded, &mut second_rng)
        );
    }
}
