//! Interactive collection of the academic profile.
//!
//! A linear prompt-driven console session: one field per line, list
//! sections end on an empty first field, blank answers fall back to the
//! previously saved value. The prompter is generic over its reader and
//! writer so tests can script a whole session.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::errors::HomepageError;
use crate::models::profile::{
    Education, LanguagePreference, Project, Publication, StylePreference, UserProfile,
};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, text: &str) -> Result<(), HomepageError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    fn ask(&mut self, label: &str) -> Result<String, HomepageError> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn ask_or(&mut self, label: &str, current: &str) -> Result<String, HomepageError> {
        let answer = self.ask(label)?;
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }

    fn ask_optional(&mut self, label: &str) -> Result<Option<String>, HomepageError> {
        let answer = self.ask(label)?;
        Ok(if answer.is_empty() { None } else { Some(answer) })
    }

    fn confirm(&mut self, label: &str) -> Result<bool, HomepageError> {
        let answer = self.ask(&format!("{label} (y/n)"))?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

/// Splits a comma-separated console answer into an ordered list.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Loads a previously saved profile. Any read or parse failure means the
/// user re-enters the data.
pub fn load_saved_profile(path: &Path) -> Option<UserProfile> {
    let bytes = std::fs::read(path).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Persists the profile beside the binary so later runs can reuse it.
pub fn save_profile(path: &Path, profile: &UserProfile) -> Result<(), HomepageError> {
    let json = serde_json::to_string_pretty(profile)
        .map_err(|e| HomepageError::Internal(anyhow::anyhow!("serialize profile: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Collects the profile, reusing a saved one when the user declines to
/// modify it.
pub fn collect_profile<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    saved: Option<UserProfile>,
) -> Result<UserProfile, HomepageError> {
    match saved {
        Some(saved) => {
            prompter.say("Loaded saved profile.")?;
            if !prompter.confirm("Modify the saved data?")? {
                return Ok(saved);
            }
            collect_fields(prompter, saved)
        }
        None => collect_fields(prompter, empty_profile()),
    }
}

fn empty_profile() -> UserProfile {
    UserProfile {
        name: String::new(),
        title: String::new(),
        affiliation: String::new(),
        email: String::new(),
        research_interests: vec![],
        education: vec![],
        publications: vec![],
        projects: vec![],
        bio: String::new(),
        style_preference: StylePreference::default(),
        language_preference: LanguagePreference::default(),
    }
}

fn collect_fields<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    existing: UserProfile,
) -> Result<UserProfile, HomepageError> {
    let name = prompter.ask_or("Name", &existing.name)?;
    let title = prompter.ask_or("Title", &existing.title)?;
    let affiliation = prompter.ask_or("Affiliation", &existing.affiliation)?;
    let email = prompter.ask_or("Email", &existing.email)?;

    let interests_raw = prompter.ask("Research interests (comma-separated)")?;
    let research_interests = if interests_raw.is_empty() {
        existing.research_interests
    } else {
        split_list(&interests_raw)
    };

    let education = collect_education(prompter, existing.education)?;
    let publications = collect_publications(prompter, existing.publications)?;
    let projects = collect_projects(prompter, existing.projects)?;

    let bio = prompter.ask_or("Bio", &existing.bio)?;
    let style_preference = ask_style(prompter, existing.style_preference)?;
    let language_preference = ask_language(prompter, existing.language_preference)?;

    Ok(UserProfile {
        name,
        title,
        affiliation,
        email,
        research_interests,
        education,
        publications,
        projects,
        bio,
        style_preference,
        language_preference,
    })
}

fn collect_education<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    existing: Vec<Education>,
) -> Result<Vec<Education>, HomepageError> {
    if !existing.is_empty() && !prompter.confirm("Re-enter education?")? {
        return Ok(existing);
    }
    prompter.say("Education (finish with an empty degree):")?;
    let mut entries = Vec::new();
    loop {
        let degree = prompter.ask("Degree")?;
        if degree.is_empty() {
            break;
        }
        let institution = prompter.ask("Institution")?;
        let year = prompter.ask("Year")?;
        entries.push(Education {
            degree,
            institution,
            year,
        });
    }
    Ok(entries)
}

fn collect_publications<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    existing: Vec<Publication>,
) -> Result<Vec<Publication>, HomepageError> {
    if !existing.is_empty() && !prompter.confirm("Re-enter publications?")? {
        return Ok(existing);
    }
    prompter.say("Publications (finish with an empty title):")?;
    let mut entries = Vec::new();
    loop {
        let title = prompter.ask("Title")?;
        if title.is_empty() {
            break;
        }
        let authors = split_list(&prompter.ask("Authors (comma-separated)")?);
        let venue = prompter.ask("Venue")?;
        let year = prompter.ask("Year")?;
        let url = prompter.ask_optional("URL (optional)")?;
        entries.push(Publication {
            title,
            authors,
            venue,
            year,
            url,
        });
    }
    Ok(entries)
}

fn collect_projects<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    existing: Vec<Project>,
) -> Result<Vec<Project>, HomepageError> {
    if !existing.is_empty() && !prompter.confirm("Re-enter projects?")? {
        return Ok(existing);
    }
    prompter.say("Projects (finish with an empty name):")?;
    let mut entries = Vec::new();
    loop {
        let name = prompter.ask("Project name")?;
        if name.is_empty() {
            break;
        }
        let description = prompter.ask("Description")?;
        let year = prompter.ask("Year")?;
        let url = prompter.ask_optional("URL (optional)")?;
        entries.push(Project {
            name,
            description,
            year,
            url,
        });
    }
    Ok(entries)
}

fn ask_style<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    current: StylePreference,
) -> Result<StylePreference, HomepageError> {
    loop {
        let answer = prompter.ask("Style preference (minimal/modern/traditional)")?;
        match StylePreference::parse(&answer, current) {
            Ok(style) => return Ok(style),
            Err(message) => prompter.say(&message)?,
        }
    }
}

fn ask_language<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    current: LanguagePreference,
) -> Result<LanguagePreference, HomepageError> {
    loop {
        let answer = prompter.ask("Language preference (native/foreign/bilingual)")?;
        match LanguagePreference::parse(&answer, current) {
            Ok(language) => return Ok(language),
            Err(message) => prompter.say(&message)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str, saved: Option<UserProfile>) -> UserProfile {
        let mut prompter = Prompter::new(Cursor::new(script.to_string()), Vec::new());
        collect_profile(&mut prompter, saved).unwrap()
    }

    fn saved_profile() -> UserProfile {
        UserProfile {
            name: "Ada Lovelace".to_string(),
            title: "Professor".to_string(),
            affiliation: "AEI".to_string(),
            email: "ada@example.edu".to_string(),
            research_interests: vec!["computation".to_string()],
            education: vec![Education {
                degree: "PhD".to_string(),
                institution: "London".to_string(),
                year: "1840".to_string(),
            }],
            publications: vec![Publication {
                title: "Notes".to_string(),
                authors: vec!["A. Lovelace".to_string()],
                venue: "Memoirs".to_string(),
                year: "1843".to_string(),
                url: None,
            }],
            projects: vec![],
            bio: "First programmer.".to_string(),
            style_preference: StylePreference::Traditional,
            language_preference: LanguagePreference::Native,
        }
    }

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list(" systems , PL ,, compilers "),
            vec!["systems", "PL", "compilers"]
        );
        assert!(split_list("   ").is_empty());
    }

    #[test]
    fn test_fresh_session_collects_every_section() {
        let script = "Ada\nProf\nMIT\nada@mit.edu\nsystems, PL\n\
                      PhD\nMIT\n2020\n\n\
                      \n\
                      \n\
                      Short bio\nmodern\nbilingual\n";
        let profile = run_session(script, None);

        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.title, "Prof");
        assert_eq!(profile.research_interests, vec!["systems", "PL"]);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].degree, "PhD");
        assert!(profile.publications.is_empty());
        assert!(profile.projects.is_empty());
        assert_eq!(profile.bio, "Short bio");
        assert_eq!(profile.style_preference, StylePreference::Modern);
        assert_eq!(profile.language_preference, LanguagePreference::Bilingual);
    }

    #[test]
    fn test_saved_profile_reused_when_user_declines_to_modify() {
        let profile = run_session("n\n", Some(saved_profile()));
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.publications.len(), 1);
        assert_eq!(profile.style_preference, StylePreference::Traditional);
    }

    #[test]
    fn test_blank_answers_fall_back_to_saved_values() {
        // Modify: keep every scalar blank, keep lists, keep preferences.
        let script = "y\n\n\n\n\n\n\
                      n\n\
                      n\n\
                      \n\
                      \n\n\n";
        let profile = run_session(script, Some(saved_profile()));

        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.email, "ada@example.edu");
        assert_eq!(profile.research_interests, vec!["computation"]);
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.publications.len(), 1);
        assert_eq!(profile.bio, "First programmer.");
        assert_eq!(profile.style_preference, StylePreference::Traditional);
        assert_eq!(profile.language_preference, LanguagePreference::Native);
    }

    #[test]
    fn test_invalid_style_is_reasked() {
        let script = "Ada\n\n\n\n\n\n\n\n\nfancy\nminimal\nnative\n";
        let profile = run_session(script, None);
        assert_eq!(profile.style_preference, StylePreference::Minimal);
    }

    #[test]
    fn test_publication_url_blank_becomes_none() {
        let script = "Ada\n\n\n\n\n\
                      \n\
                      Notes\nA. Lovelace, C. Babbage\nMemoirs\n1843\n\n\
                      \n\
                      \n\
                      \nminimal\nnative\n";
        let profile = run_session(script, None);

        assert_eq!(profile.publications.len(), 1);
        assert_eq!(profile.publications[0].authors.len(), 2);
        assert!(profile.publications[0].url.is_none());
    }

    #[test]
    fn test_load_saved_profile_handles_missing_and_corrupt_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_data.json");

        assert!(load_saved_profile(&path).is_none());

        std::fs::write(&path, "{not-json").unwrap();
        assert!(load_saved_profile(&path).is_none());

        save_profile(&path, &saved_profile()).unwrap();
        let loaded = load_saved_profile(&path).unwrap();
        assert_eq!(loaded.name, "Ada Lovelace");
    }
}
