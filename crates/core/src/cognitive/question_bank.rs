//! The fixed assessment catalog: eighteen questions, three per category.
//!
//! Weights are hand-tuned per question and deliberately uneven; the
//! questions most predictive of deep burnout (identity erosion, somatic
//! symptoms) carry more of the score.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::cognitive_model::{CognitiveCategory, CognitiveDebtQuestion};

/// Returns the full question catalog in presentation order.
pub fn create_assessment_questions() -> Vec<CognitiveDebtQuestion> {
    vec![
        // Mental fog
        question(
            "mental_fog_1",
            CognitiveCategory::MentalFog,
            "How often do you lose the thread of what you were doing mid-task?",
            "Dropped threads and re-read paragraphs are early signs of an overloaded working memory.",
            dec!(1.2),
        ),
        question(
            "mental_fog_2",
            CognitiveCategory::MentalFog,
            "How often do small decisions, like what to eat or which message to answer first, feel heavy?",
            "Decision fatigue shows up in the trivial choices long before the big ones.",
            dec!(1.0),
        ),
        question(
            "mental_fog_3",
            CognitiveCategory::MentalFog,
            "How often do you reach the end of a workday unable to say what it contained?",
            "Days that blur together suggest attention is being spent faster than it recovers.",
            dec!(1.1),
        ),
        // Emotional exhaustion
        question(
            "emotional_exhaustion_1",
            CognitiveCategory::EmotionalExhaustion,
            "How often do you feel drained before the day has properly started?",
            "Waking up tired of the day ahead is exhaustion of reserves, not of sleep.",
            dec!(1.3),
        ),
        question(
            "emotional_exhaustion_2",
            CognitiveCategory::EmotionalExhaustion,
            "How often do small requests from colleagues or family feel like too much?",
            "A shrinking tolerance for ordinary demands tracks emotional depletion closely.",
            dec!(1.2),
        ),
        question(
            "emotional_exhaustion_3",
            CognitiveCategory::EmotionalExhaustion,
            "How often do you feel nothing at all about things that used to move you?",
            "Numbness is the late stage of exhaustion, after irritation has burned off.",
            dec!(1.4),
        ),
        // Creative shutdown
        question(
            "creative_shutdown_1",
            CognitiveCategory::CreativeShutdown,
            "How often do you default to the safest option because imagining another feels like work?",
            "Creativity is the first budget a tired mind cuts.",
            dec!(1.1),
        ),
        question(
            "creative_shutdown_2",
            CognitiveCategory::CreativeShutdown,
            "How often do ideas for your own projects simply not arrive anymore?",
            "An idle idea stream usually means the mind has no slack left to wander with.",
            dec!(1.0),
        ),
        question(
            "creative_shutdown_3",
            CognitiveCategory::CreativeShutdown,
            "How often do hobbies that used to absorb you sit untouched?",
            "Abandoned hobbies are deferred selves; the backlog is informative.",
            dec!(1.2),
        ),
        // Relationship decay
        question(
            "relationship_decay_1",
            CognitiveCategory::RelationshipDecay,
            "How often do you cancel plans because you have nothing left for people?",
            "Withdrawing from company to recover from work is a loud early signal.",
            dec!(1.3),
        ),
        question(
            "relationship_decay_2",
            CognitiveCategory::RelationshipDecay,
            "How often are you physically present but mentally still at work?",
            "Half-presence costs relationships slowly and invisibly.",
            dec!(1.1),
        ),
        question(
            "relationship_decay_3",
            CognitiveCategory::RelationshipDecay,
            "How often do conversations with people you love feel like another task?",
            "When connection becomes a to-do item, the reserves that feed it are gone.",
            dec!(1.2),
        ),
        // Physical symptoms
        question(
            "physical_symptoms_1",
            CognitiveCategory::PhysicalSymptoms,
            "How often does a full night of sleep fail to repair you?",
            "Unrefreshing sleep is one of the most reliable somatic markers of burnout.",
            dec!(1.4),
        ),
        question(
            "physical_symptoms_2",
            CognitiveCategory::PhysicalSymptoms,
            "How often do you notice tension in your jaw, shoulders or stomach only when it releases?",
            "Chronic load hides in the body and announces itself on the way out.",
            dec!(1.2),
        ),
        question(
            "physical_symptoms_3",
            CognitiveCategory::PhysicalSymptoms,
            "How often do you get sick the moment you finally stop?",
            "Crashing on the first day of a holiday is the immune bill arriving.",
            dec!(1.3),
        ),
        // Identity erosion
        question(
            "identity_erosion_1",
            CognitiveCategory::IdentityErosion,
            "How often do you struggle to describe who you are without naming your job?",
            "When the role swallows the person, leaving it starts to feel like ceasing to exist.",
            dec!(1.5),
        ),
        question(
            "identity_erosion_2",
            CognitiveCategory::IdentityErosion,
            "How often does the person you were before this job feel like a stranger?",
            "Distance from the pre-job self measures how much ground the job has taken.",
            dec!(1.3),
        ),
        question(
            "identity_erosion_3",
            CognitiveCategory::IdentityErosion,
            "How often do you defer what you actually want to an imagined later?",
            "A permanently postponed life is the quietest form of erosion.",
            dec!(1.4),
        ),
    ]
}

fn question(
    id: &str,
    category: CognitiveCategory,
    question: &str,
    description: &str,
    weight: Decimal,
) -> CognitiveDebtQuestion {
    CognitiveDebtQuestion {
        id: id.to_string(),
        category,
        question: question.to_string(),
        description: description.to_string(),
        weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_three_questions_per_category() {
        let questions = create_assessment_questions();
        assert_eq!(questions.len(), 18);

        for category in CognitiveCategory::ALL {
            let count = questions.iter().filter(|q| q.category == category).count();
            assert_eq!(count, 3, "category {} should have 3 questions", category);
        }
    }

    #[test]
    fn test_question_ids_are_unique() {
        let questions = create_assessment_questions();
        let ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn test_weights_stay_in_tuned_range() {
        for q in create_assessment_questions() {
            assert!(q.weight >= dec!(1.0) && q.weight <= dec!(1.5), "{}", q.id);
        }
    }
}
