//! Built-in starter posts
//!
//! Each template is written in the markup dialect and is meant to be edited
//! and then converted like any other draft.

use serde::{Deserialize, Serialize};

const ANNOUNCEMENT: &str = "🎉 **Big News!**

I'm excited to share that **[Your Achievement - e.g., \"I just landed my dream job as Senior Developer at TechCorp!\"]**

**What this means:**
- New challenges and growth opportunities
- Chance to work with cutting-edge technologies
- Building products that impact millions of users

**Special thanks** to my mentors, colleagues, and everyone who believed in me! 🙏

Your support made this possible. What's your biggest career milestone this year?

#careergrowth #newjob #grateful #technology #milestone";

const TIP: &str = "💡 **Pro Tip:** [Your actionable tip - e.g., \"Always review your code before pushing to production\"]

**Here's what I've learned in 4+ years of development:**

- **Test everything twice:** Bugs caught early save hours of debugging later
- **Write clean code:** Your future self (and teammates) will thank you
- **Document as you go:** Good documentation is a developer's best friend

**Bonus tip:** Use meaningful commit messages - your Git history tells a story! 📚

*What's your best development tip?* Share it below! 👇

#coding #programming #webdevelopment #tips #softwaredevelopment";

const STORY: &str = "📖 **Story time:** How I turned a major bug into a learning opportunity

**The challenge:**
Production was down for 2 hours due to a database query I wrote. 500+ users affected, revenue lost, and I felt terrible.

**The solution:**
Instead of panicking, I immediately rolled back, analyzed the issue, and implemented proper indexing. Then I created monitoring alerts to catch similar issues early.

**The result:**
Database performance improved by 300%, and we prevented future outages. That \"mistake\" led to a system-wide optimization initiative.

**Key takeaway:** _Every failure is a disguise for future success - if you choose to learn from it._

What's a \"failure\" that taught you the most? Let's normalize learning from mistakes! 💪

#learning #growth #softwaredevelopment #careerdevelopment #mindset";

/// The built-in post templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Announcement,
    Tip,
    Story,
}

impl Template {
    /// Get all templates.
    pub fn all() -> &'static [Template] {
        &[Template::Announcement, Template::Tip, Template::Story]
    }

    /// Lowercase identifier, as used on the command line and in settings.
    pub fn name(&self) -> &'static str {
        match self {
            Template::Announcement => "announcement",
            Template::Tip => "tip",
            Template::Story => "story",
        }
    }

    /// Look up a template by identifier, ignoring case.
    pub fn from_name(name: &str) -> Option<Template> {
        let name = name.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|t| t.name() == name)
    }

    /// The template's markup.
    pub fn text(&self) -> &'static str {
        match self {
            Template::Announcement => ANNOUNCEMENT,
            Template::Tip => TIP,
            Template::Story => STORY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;

    #[test]
    fn test_from_name() {
        assert_eq!(Template::from_name("tip"), Some(Template::Tip));
        assert_eq!(Template::from_name(" Story "), Some(Template::Story));
        assert_eq!(Template::from_name("poem"), None);
    }

    #[test]
    fn test_names_roundtrip() {
        for template in Template::all() {
            assert_eq!(Template::from_name(template.name()), Some(*template));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Template::Announcement).unwrap();
        assert_eq!(json, "\"announcement\"");
        let parsed: Template = serde_json::from_str("\"story\"").unwrap();
        assert_eq!(parsed, Template::Story);
    }

    #[test]
    fn test_templates_convert_cleanly() {
        for template in Template::all() {
            let output = convert(template.text());
            assert!(!output.contains("**"), "{} left bold markers", template.name());
            assert!(output.contains('#'), "{} lost its hashtags", template.name());
        }
    }

    #[test]
    fn test_announcement_bullets() {
        let output = convert(Template::Announcement.text());
        assert!(output.contains("• New challenges and growth opportunities"));
    }

    #[test]
    fn test_story_takeaway_underlined() {
        let output = convert(Template::Story.text());
        assert!(output.contains("E\u{332}v\u{332}e\u{332}r\u{332}y\u{332}"));
    }
}
