use crate::models::{Assessment, AssessmentSnapshot, ProgressStatus, ProgressVerdict};

/// A progress verdict needs at least two assessments; callers must reject
/// shorter histories before invoking [`compare`].
pub const MIN_HISTORY_LEN: usize = 2;

const IMPROVED_SUGGESTIONS: [&str; 2] = [
    "Your hair health is showing improvement! Keep up with your current routine.",
    "Consistency is key. Continue to follow the recommendations from your last report.",
];

const DECLINED_SUGGESTIONS: [&str; 3] = [
    "Your hair health has declined or not improved. It might be time to adjust your routine.",
    "Re-evaluate your stress levels and diet, as they are major factors.",
    "Consider consulting a dermatologist for a more in-depth analysis.",
];

/// Compares the two most recent assessments of one user, supplied in
/// recency order. A strictly higher latest score counts as improvement;
/// a tie does not.
pub fn compare(latest: &Assessment, previous: &Assessment) -> ProgressVerdict {
    let latest_score = latest.report.score;
    let previous_score = previous.report.score;

    let (progress_status, suggestions) = if latest_score > previous_score {
        (ProgressStatus::Improved, &IMPROVED_SUGGESTIONS[..])
    } else {
        (ProgressStatus::Declined, &DECLINED_SUGGESTIONS[..])
    };

    ProgressVerdict {
        latest_assessment: AssessmentSnapshot {
            score: latest_score,
            timestamp: latest.created_at,
        },
        previous_assessment: AssessmentSnapshot {
            score: previous_score,
            timestamp: previous.created_at,
        },
        progress_status,
        suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
    }
}
