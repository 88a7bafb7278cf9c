use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

use crate::stats::ParsedData;

pub const CONCEPT_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScriptLanguage {
    #[default]
    English,
    Hindi,
}

impl ScriptLanguage {
    fn instruction(self) -> &'static str {
        match self {
            ScriptLanguage::English => "Write the script in English.",
            ScriptLanguage::Hindi => {
                "Write the ENTIRE script in HINDI language (Devanagari script). All voiceovers, \
                 on-screen text, and dialogues must be in Hindi. You can use Hinglish for brand \
                 names if needed."
            }
        }
    }
}

impl fmt::Display for ScriptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptLanguage::English => write!(f, "English"),
            ScriptLanguage::Hindi => write!(f, "Hindi"),
        }
    }
}

/// A short ad concept seeded from the report's winning keywords.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptConcept {
    pub title: String,
    pub format: String,
    pub hook: String,
    pub script: String,
}

fn keyword_at(data: &ParsedData, index: usize) -> Option<&str> {
    data.keywords.get(index).map(|k| k.word.as_str())
}

pub fn generate_script_concepts(data: &ParsedData, topic: &str) -> Result<Vec<ScriptConcept>> {
    let topic = topic.trim();
    if topic.is_empty() {
        anyhow::bail!("A topic is required to generate script concepts");
    }

    let lead_keywords = data
        .keywords
        .iter()
        .take(2)
        .map(|k| k.word.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(vec![
        ScriptConcept {
            title: format!("{} for Families", topic),
            format: "IG Reel (15s)".to_string(),
            hook: format!("\"Why every parent should know about {}\"", topic),
            script: format!(
                "Hook: Show a parent looking stressed. Text: \"Parenting is hard...\" \n\n\
                 Body: Quick cuts showing {} helping the family. Focus on {}.\n\n\
                 CTA: \"Learn how in our workshop →\"",
                topic,
                keyword_at(data, 0).unwrap_or("family harmony")
            ),
        },
        ScriptConcept {
            title: format!("Science Behind {}", topic),
            format: "IG Reel (20s)".to_string(),
            hook: format!("\"Is {} science or superstition?\"", topic),
            script: format!(
                "Hook: Asking the skeptical question.\n\n\
                 Body: Show scientific research/studies. Use keywords: {}.\n\n\
                 CTA: \"See the proof yourself →\"",
                lead_keywords
            ),
        },
        ScriptConcept {
            title: format!("{} from Anywhere", topic),
            format: "Story/Reel (10s)".to_string(),
            hook: "\"You don't even need to be there...\"".to_string(),
            script: format!(
                "Hook: Show someone relaxing at home.\n\n\
                 Body: Emphasize distance/convenience aspect of {}. Use {} angle.\n\n\
                 CTA: \"Try it from home →\"",
                topic,
                keyword_at(data, 2).unwrap_or("healing")
            ),
        },
    ])
}

const SECTION_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const HEADER_RULE: &str = "═══════════════════════════════════════";

const SECTIONS: &[(&str, &[&str])] = &[
    (
        "HOOK (0-3 SECONDS)",
        &[
            "Opening Line: [Write exact dialogue]",
            "Visual: [Describe the shot]",
            "On-Screen Text: [What text appears]",
        ],
    ),
    (
        "PROBLEM AGITATION (3-8 SECONDS)",
        &[
            "Voiceover: [Exact script]",
            "Visual: [Describe what viewer sees]",
            "On-Screen Text: [Key text overlay]",
        ],
    ),
    (
        "SOLUTION (8-15 SECONDS)",
        &[
            "Voiceover: [Exact script]",
            "Visual: [Show the solution in action]",
            "On-Screen Text: [Main benefit text]",
        ],
    ),
    (
        "SOCIAL PROOF (15-20 SECONDS)",
        &[
            "Voiceover: [Build credibility]",
            "Visual: [Show testimonials/results]",
            "On-Screen Text: [Stats or quotes]",
        ],
    ),
    (
        "CALL-TO-ACTION (20-25 SECONDS)",
        &[
            "Voiceover: [Clear next step]",
            "Visual: [CTA button/link visual]",
            "On-Screen Text: [Action text]",
        ],
    ),
];

/// Builds the prompt asking a text model to expand a concept into a
/// production-ready script. Only the prompt is produced here.
pub fn build_full_script_prompt(
    concept: &ScriptConcept,
    data: &ParsedData,
    topic: &str,
    language: ScriptLanguage,
) -> String {
    let top_themes = data
        .winning_themes()
        .take(3)
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let top_keywords = data
        .keywords
        .iter()
        .take(5)
        .map(|k| k.word.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let target = if concept.format.contains("Reel") {
        "Instagram Reels"
    } else {
        "video ads"
    };

    let mut prompt = format!(
        "You are a professional social media ad scriptwriter. Create a COMPLETE, DETAILED video \
         ad script for the following concept:\n\n\
         Title: {title}\n\
         Format: {format}\n\
         Hook: {hook}\n\n\
         Context:\n\
         - Winning Themes from data: {themes}\n\
         - Top Keywords: {keywords}\n\
         - This is for {topic}\n\n\
         LANGUAGE REQUIREMENT: {language}\n\n\
         Create a PRODUCTION-READY script with clear sections. Use this EXACT format (NO markdown \
         symbols like ** or *** or ---, just clean text):\n\n\
         {HEADER_RULE}\n\
         TITLE: {title}\n\
         FORMAT: {format}\n\
         DURATION: 15-25 seconds\n\
         {HEADER_RULE}\n",
        title = concept.title,
        format = concept.format,
        hook = concept.hook,
        themes = top_themes,
        keywords = top_keywords,
        topic = topic.trim(),
        language = language.instruction(),
    );

    for (number, (heading, fields)) in SECTIONS.iter().enumerate() {
        prompt.push_str(&format!(
            "\n📍 SECTION {}: {}\n{}\n",
            number + 1,
            heading,
            SECTION_RULE
        ));
        for field in fields.iter() {
            prompt.push_str(field);
            prompt.push('\n');
        }
    }

    prompt.push_str(&format!(
        "\n{SECTION_RULE}\n\
         🎵 MUSIC: [Mood and style recommendation]\n\
         🎨 COLOR PALETTE: [Suggested colors]\n\
         💡 PRO TIP: [One production insight]\n\
         {SECTION_RULE}\n\n\
         Make it compelling, specific, and ready to hand to a video editor. Include exact words \
         to say and specific shots to capture. Optimize for {target}."
    ));

    prompt
}
