use crate::battle::types::{BattleQuestion, Boss, Difficulty};

#[allow(clippy::too_many_arguments)]
fn boss(
    id: &str,
    name: &str,
    description: &str,
    subject: &str,
    topic: &str,
    max_hp: u32,
    base_damage: u32,
    difficulty: Difficulty,
    is_practice: bool,
    avatar: (&str, &str),
) -> Boss {
    Boss {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        subject: subject.to_string(),
        topic: topic.to_string(),
        max_hp,
        base_damage,
        difficulty,
        is_practice,
        avatar_color: avatar.0.to_string(),
        avatar_icon: avatar.1.to_string(),
    }
}

fn question(
    id: &str,
    text: &str,
    options: &[&str],
    correct_index: usize,
    difficulty: Difficulty,
    hint: Option<&str>,
) -> BattleQuestion {
    BattleQuestion {
        id: id.to_string(),
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index,
        difficulty,
        hint: hint.map(str::to_string),
    }
}

pub(super) fn entries() -> Vec<(Boss, Vec<BattleQuestion>)> {
    use Difficulty::{Easy, Hard, Medium};

    vec![
        (
            boss(
                "training-golem",
                "Training Golem",
                "A sparring partner that hits softly. Perfect for warming up.",
                "General",
                "Warm-up Mix",
                300,
                10,
                Easy,
                true,
                ("emerald", "robot"),
            ),
            vec![
                question(
                    "tg-1",
                    "What is 7 × 8?",
                    &["54", "56", "58", "64"],
                    1,
                    Easy,
                    Some("7 × 8 is 7 × 7 plus one more 7."),
                ),
                question(
                    "tg-2",
                    "Which planet is closest to the Sun?",
                    &["Venus", "Earth", "Mercury", "Mars"],
                    2,
                    Easy,
                    None,
                ),
                question(
                    "tg-3",
                    "Which word is a noun?",
                    &["quickly", "happiness", "run", "bright"],
                    1,
                    Easy,
                    Some("A noun names a person, place, thing or idea."),
                ),
            ],
        ),
        (
            boss(
                "algebra-titan",
                "Algebra Titan",
                "Guards the gate of linear equations. Balance both sides to break it.",
                "Mathematics",
                "Linear Equations",
                600,
                15,
                Medium,
                false,
                ("indigo", "calculator"),
            ),
            vec![
                question(
                    "at-1",
                    "Solve for x: 2x + 6 = 14",
                    &["x = 3", "x = 4", "x = 5", "x = 10"],
                    1,
                    Easy,
                    Some("Subtract 6 from both sides first."),
                ),
                question(
                    "at-2",
                    "Solve for x: 3x - 7 = 2x + 5",
                    &["x = -2", "x = 2", "x = 12", "x = -12"],
                    2,
                    Medium,
                    Some("Move every x term to the left side."),
                ),
                question(
                    "at-3",
                    "What is the slope of y = -4x + 9?",
                    &["9", "-4", "4", "-9"],
                    1,
                    Medium,
                    None,
                ),
                question(
                    "at-4",
                    "If 5(x - 2) = 15, what is x?",
                    &["1", "3", "5", "7"],
                    2,
                    Medium,
                    Some("Divide both sides by 5 before anything else."),
                ),
                question(
                    "at-5",
                    "Which point lies on the line y = 2x + 1?",
                    &["(1, 2)", "(2, 5)", "(0, 2)", "(3, 6)"],
                    1,
                    Hard,
                    None,
                ),
            ],
        ),
        (
            boss(
                "photosynthesis-hydra",
                "Photosynthesis Hydra",
                "Feeds on sunlight and regrows quickly. Keep the streak alive.",
                "Science",
                "Photosynthesis",
                800,
                20,
                Hard,
                false,
                ("green", "leaf"),
            ),
            vec![
                question(
                    "ph-1",
                    "Where in the plant cell does photosynthesis take place?",
                    &["Mitochondria", "Nucleus", "Chloroplast", "Ribosome"],
                    2,
                    Easy,
                    Some("Look for the organelle that holds chlorophyll."),
                ),
                question(
                    "ph-2",
                    "Which gas do plants take in for photosynthesis?",
                    &["Oxygen", "Carbon dioxide", "Nitrogen", "Hydrogen"],
                    1,
                    Easy,
                    None,
                ),
                question(
                    "ph-3",
                    "What is the main product of the Calvin cycle?",
                    &["Glucose precursors (G3P)", "ATP", "Water", "Oxygen"],
                    0,
                    Hard,
                    Some("The light-independent reactions build sugars."),
                ),
                question(
                    "ph-4",
                    "Which pigment absorbs most of the light used in photosynthesis?",
                    &["Carotene", "Xanthophyll", "Chlorophyll a", "Melanin"],
                    2,
                    Medium,
                    None,
                ),
            ],
        ),
        (
            boss(
                "syntax-sphinx",
                "Syntax Sphinx",
                "Asks riddles about sentence structure. Wrong answers feed its shield.",
                "Language",
                "Sentence Structure",
                450,
                12,
                Easy,
                false,
                ("amber", "book"),
            ),
            vec![
                question(
                    "ss-1",
                    "What is the subject of: \"The tired cat slept on the mat\"?",
                    &["slept", "the mat", "The tired cat", "on"],
                    2,
                    Easy,
                    Some("Ask who or what performs the action."),
                ),
                question(
                    "ss-2",
                    "Which sentence is in the passive voice?",
                    &[
                        "The chef cooked the meal.",
                        "The meal was cooked by the chef.",
                        "The chef is cooking.",
                        "Cook the meal!",
                    ],
                    1,
                    Medium,
                    None,
                ),
                question(
                    "ss-3",
                    "Which word is a conjunction?",
                    &["because", "under", "very", "quiet"],
                    0,
                    Easy,
                    Some("Conjunctions join clauses together."),
                ),
            ],
        ),
    ]
}
