//! Static guidance content keyed by predicted label. Lookup is total: an
//! unknown label yields the empty record, which clients render as absent.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct Advice {
    pub description: String,
    pub strengths: Vec<String>,
    pub advice: Vec<String>,
    pub career_suggestions: Vec<String>,
}

pub fn lookup(label: &str) -> Advice {
    match label {
        "Introvert" => Advice {
            description: "You recharge through solitude and reflection. Deep focus, \
                          careful listening, and rich inner thought come naturally to you, \
                          and you tend to prefer a few close relationships over many \
                          casual ones."
                .to_string(),
            strengths: strings(&[
                "Deep, sustained concentration",
                "Thoughtful and deliberate decision-making",
                "Strong one-on-one relationships",
                "Independent, self-directed work",
            ]),
            advice: strings(&[
                "Schedule recovery time after demanding social events",
                "Practice speaking up early in meetings so your ideas are heard",
                "Let colleagues know that quiet does not mean disengaged",
            ]),
            career_suggestions: strings(&[
                "Software engineering",
                "Research and analysis",
                "Writing and editing",
                "Accounting",
            ]),
        },
        "Extrovert" => Advice {
            description: "You draw energy from people and activity. Groups, conversation, \
                          and fast-moving environments bring out your best, and you think \
                          well out loud."
                .to_string(),
            strengths: strings(&[
                "Natural networking and relationship building",
                "Comfortable leading and presenting",
                "Quick to energize a team",
                "Adaptable in changing situations",
            ]),
            advice: strings(&[
                "Build in pauses to reflect before big decisions",
                "Make room for quieter voices in discussions",
                "Develop comfort with solo deep work",
            ]),
            career_suggestions: strings(&[
                "Sales and business development",
                "Public relations",
                "Teaching and training",
                "Event management",
            ]),
        },
        "Ambivert" => Advice {
            description: "You sit between the extremes, drawing energy from both company \
                          and solitude depending on context. That flexibility lets you \
                          adapt your style to what a situation needs."
                .to_string(),
            strengths: strings(&[
                "Reads the room and adjusts naturally",
                "Comfortable alone or in groups",
                "Balances talking with listening",
                "Bridges between different personality styles",
            ]),
            advice: strings(&[
                "Notice which settings drain you and plan around them",
                "Use your range deliberately rather than defaulting to the middle",
                "Advocate for both quiet focus time and collaboration on your team",
            ]),
            career_suggestions: strings(&[
                "Product management",
                "Consulting",
                "Design",
                "Project coordination",
            ]),
        },
        _ => Advice::default(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
