//! Sample catalog content
//!
//! Three ready-made sessions seeded when the catalog is empty so the
//! player has something to show on first run.

use super::entity::{DifficultyLevel, MeditationType, NewSession};

/// A seedable session script: metadata plus (text, duration_seconds) steps
pub struct SessionScript {
    pub session: NewSession,
    pub steps: &'static [(&'static str, i64)],
}

/// The built-in sample sessions
pub fn sample_sessions() -> Vec<SessionScript> {
    vec![
        SessionScript {
            session: NewSession {
                title: "Basic Breathing Meditation".to_string(),
                description:
                    "A gentle introduction to meditation through focused breathing. Perfect for beginners."
                        .to_string(),
                meditation_type: MeditationType::Breathing,
                difficulty_level: DifficultyLevel::Beginner,
                duration_minutes: 10,
            },
            steps: BREATHING_STEPS,
        },
        SessionScript {
            session: NewSession {
                title: "Present Moment Awareness".to_string(),
                description: "Cultivate awareness of the present moment through mindful observation."
                    .to_string(),
                meditation_type: MeditationType::Mindfulness,
                difficulty_level: DifficultyLevel::Beginner,
                duration_minutes: 15,
            },
            steps: MINDFULNESS_STEPS,
        },
        SessionScript {
            session: NewSession {
                title: "Full Body Relaxation".to_string(),
                description:
                    "A soothing body scan meditation to release tension and promote deep relaxation."
                        .to_string(),
                meditation_type: MeditationType::BodyScan,
                difficulty_level: DifficultyLevel::Intermediate,
                duration_minutes: 20,
            },
            steps: BODY_SCAN_STEPS,
        },
    ]
}

const BREATHING_STEPS: &[(&str, i64)] = &[
    (
        "Welcome to this 10-minute breathing meditation. Find a comfortable seated position and close your eyes.",
        30,
    ),
    (
        "Take a moment to notice your natural breath, without trying to change it. Simply observe.",
        60,
    ),
    (
        "Now, begin to focus your attention on the sensation of breathing. Feel the air entering your nostrils.",
        90,
    ),
    (
        "As you breathe in, notice the expansion in your chest and belly. Breathe naturally and comfortably.",
        90,
    ),
    (
        "When your mind wanders to other thoughts, gently return your attention to your breath. This is normal.",
        90,
    ),
    (
        "Continue focusing on each inhale and exhale. Let your breath be your anchor to the present moment.",
        120,
    ),
    ("If you notice tension in your body, allow it to soften with each exhale.", 90),
    (
        "Keep bringing your attention back to your breathing whenever you notice it has wandered.",
        120,
    ),
    (
        "Now, begin to deepen your breath slightly. Breathe in for 4 counts, hold for 2, exhale for 6.",
        120,
    ),
    ("Continue this gentle rhythm. In for 4, hold for 2, out for 6.", 120),
    ("As we near the end, return to your natural breathing pattern.", 60),
    (
        "Take a moment to notice how you feel. Wiggle your fingers and toes, and when ready, open your eyes.",
        45,
    ),
];

const MINDFULNESS_STEPS: &[(&str, i64)] = &[
    (
        "Welcome to this mindfulness meditation. Sit comfortably and allow your eyes to close gently.",
        30,
    ),
    ("Begin by taking three slow, deep breaths to settle into this moment.", 45),
    (
        "Now, expand your awareness to include sounds around you. Don't judge or analyze, just notice.",
        90,
    ),
    (
        "What sounds do you hear? Perhaps birds, traffic, or the hum of appliances. Simply observe.",
        90,
    ),
    (
        "Now bring attention to physical sensations. Notice where your body touches the chair or floor.",
        90,
    ),
    (
        "Feel the temperature of the air on your skin. Is there any tension or comfort in your body?",
        90,
    ),
    (
        "Notice any emotions that might be present. Give them space without trying to change them.",
        90,
    ),
    ("Observe your thoughts as they come and go, like clouds passing through the sky.", 120),
    (
        "You are the observer of your experience, not caught up in it. Rest in this awareness.",
        120,
    ),
    (
        "If you find yourself getting carried away by thoughts, gently return to simply observing.",
        90,
    ),
    ("Notice the quality of your mind right now. Is it busy, calm, scattered, or focused?", 90),
    (
        "Continue resting in open awareness, welcoming whatever arises in your experience.",
        120,
    ),
    ("As we conclude, take a moment to appreciate this time you've given yourself.", 60),
    (
        "Slowly wiggle your fingers and toes, and when you're ready, gently open your eyes.",
        45,
    ),
];

const BODY_SCAN_STEPS: &[(&str, i64)] = &[
    (
        "Welcome to this body scan meditation. Lie down comfortably or sit with your back straight.",
        30,
    ),
    ("Close your eyes and take several deep breaths to begin relaxing your entire body.", 60),
    ("Start by bringing attention to the top of your head. Notice any sensations there.", 75),
    ("Now move to your forehead. Allow any tension to soften and release.", 75),
    ("Notice your eyes, cheeks, and jaw. Let these muscles relax completely.", 75),
    ("Bring awareness to your neck and shoulders. Breathe into any areas of tension.", 90),
    (
        "Move down to your arms. Feel your upper arms, elbows, forearms, and hands relaxing.",
        90,
    ),
    ("Focus on your chest area. Feel it rise and fall with each natural breath.", 90),
    ("Notice your upper back and shoulder blades. Allow them to settle and release.", 90),
    ("Bring attention to your abdomen. Let it be soft and relaxed.", 75),
    ("Move to your lower back. Breathe into this area and allow it to soften.", 90),
    ("Notice your hips and pelvis. Let any tightness dissolve with each exhale.", 90),
    (
        "Feel your thighs, both the front and back muscles. Allow them to be heavy and relaxed.",
        90,
    ),
    ("Bring awareness to your knees, then your calves and shins.", 75),
    ("Finally, notice your ankles and feet. Feel them completely relaxed.", 75),
    ("Take a moment to feel your entire body as one unified, relaxed whole.", 90),
    ("Rest in this feeling of complete relaxation for a few moments.", 120),
    ("When you're ready, slowly wiggle your fingers and toes to reawaken your body.", 60),
    ("Take your time returning to full awareness, and gently open your eyes.", 45),
];
