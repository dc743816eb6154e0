// src/avatar/prompt.rs
// Avatar prompt templates

use crate::persona::PersonaRecord;
use crate::vision::PhotoDescription;

const LIKENESS_RULES: &str = "\
Keep the exact facial structure and proportions.
Do NOT change eye shape, nose, or skin tone.";

const CLOSING: &str = "No text. No watermark.";

/// Build the image prompt for a persona.
///
/// Personas with hero styling get the costume/pose/powers/background
/// template; the rest get a generic portrait brief built from the title,
/// traits and card colors.
pub fn build_prompt(persona: &PersonaRecord, subject: Option<&PhotoDescription>) -> String {
    let mut sections = Vec::new();

    match &persona.hero {
        Some(hero) => {
            sections.push(format!(
                "Transform this real person into a 3D Pixar-style superhero.\n{LIKENESS_RULES}\nOnly add the superhero costume."
            ));
            sections.push(format!("COSTUME:\n{}", hero.costume));
            sections.push(format!("POSE:\n{}", hero.pose));
            sections.push(format!("POWERS:\n{}", hero.powers));
            sections.push(format!("BACKGROUND:\n{}", hero.background));
        }
        None => {
            sections.push(format!(
                "Create a 3D Pixar-style superhero portrait of the person in this photo as \"{}\".\n{LIKENESS_RULES}",
                persona.title
            ));
            sections.push(format!("PERSONALITY:\n{}", persona.traits.join("; ")));
            sections.push(format!(
                "STYLE:\nbold shopping-superhero costume in a gradient from {} to {}, confident heroic pose, soft studio lighting",
                persona.card_color.start, persona.card_color.end
            ));
        }
    }

    if let Some(subject) = subject {
        let mut block = format!("SUBJECT:\n{}", subject.description.trim());
        if let Some(gender) = subject.gender.as_deref() {
            block.push_str(&format!("\nPresents as: {gender}"));
        }
        sections.push(block);
    }

    sections.push(CLOSING.to_string());
    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::{AnswerSet, DEFAULT_PERSONA, resolve_persona};

    #[test]
    fn test_styled_persona_uses_costume_sections() {
        let persona = resolve_persona(&AnswerSet::new("ghost", "prepaid", "lightning"));
        let hero = persona.hero.unwrap();
        let prompt = build_prompt(persona, None);

        assert!(prompt.starts_with("Transform this real person"));
        assert!(prompt.contains(&format!("COSTUME:\n{}", hero.costume)));
        assert!(prompt.contains(&format!("POSE:\n{}", hero.pose)));
        assert!(prompt.contains(&format!("POWERS:\n{}", hero.powers)));
        assert!(prompt.contains(&format!("BACKGROUND:\n{}", hero.background)));
        assert!(prompt.ends_with("No text. No watermark."));
        assert!(!prompt.contains("SUBJECT:"));
    }

    #[test]
    fn test_unstyled_persona_uses_generic_brief() {
        let prompt = build_prompt(&DEFAULT_PERSONA, None);
        assert!(prompt.contains(DEFAULT_PERSONA.title));
        assert!(prompt.contains(DEFAULT_PERSONA.card_color.start));
        assert!(prompt.contains(DEFAULT_PERSONA.traits[0]));
        assert!(!prompt.contains("COSTUME:"));
    }

    #[test]
    fn test_subject_section_appended() {
        let subject = PhotoDescription {
            gender: Some("woman".into()),
            description: "  curly dark hair, round glasses  ".into(),
        };
        let prompt = build_prompt(&DEFAULT_PERSONA, Some(&subject));
        assert!(prompt.contains("SUBJECT:\ncurly dark hair, round glasses\nPresents as: woman"));
    }

    #[test]
    fn test_subject_without_gender_is_not_defaulted() {
        let subject = PhotoDescription {
            gender: None,
            description: "short silver hair".into(),
        };
        let prompt = build_prompt(&DEFAULT_PERSONA, Some(&subject));
        assert!(prompt.contains("SUBJECT:\nshort silver hair"));
        assert!(!prompt.contains("Presents as"));
    }
}
