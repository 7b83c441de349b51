use std::{fmt, str::FromStr};

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Academic level an essay is graded against. The scoring service adjusts its
/// strictness and feedback to match; nothing else in the pipeline changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    /// Middle-school writing expectations.
    #[serde(rename = "Middle School")]
    MiddleSchool,
    /// High-school writing expectations. The default when none is given.
    #[default]
    #[serde(rename = "High School")]
    HighSchool,
    /// Undergraduate writing expectations.
    Undergraduate,
    /// Graduate or professional writing expectations.
    #[serde(rename = "Graduate/Professional")]
    Graduate,
}

impl EducationLevel {
    /// Every level, in ascending order of expectation.
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::MiddleSchool,
        EducationLevel::HighSchool,
        EducationLevel::Undergraduate,
        EducationLevel::Graduate,
    ];

    /// Returns the display name, which is also what the scoring service sees
    /// in prompts and serialized payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::MiddleSchool => "Middle School",
            EducationLevel::HighSchool => "High School",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Graduate => "Graduate/Professional",
        }
    }

    /// Returns the stable token accepted on the command line.
    pub fn cli_token(&self) -> &'static str {
        match self {
            EducationLevel::MiddleSchool => "middle-school",
            EducationLevel::HighSchool => "high-school",
            EducationLevel::Undergraduate => "undergraduate",
            EducationLevel::Graduate => "graduate",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EducationLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "middle-school" | "middle school" | "middleschool" => Ok(EducationLevel::MiddleSchool),
            "high-school" | "high school" | "highschool" => Ok(EducationLevel::HighSchool),
            "undergraduate" | "undergrad" => Ok(EducationLevel::Undergraduate),
            "graduate" | "graduate/professional" | "professional" | "grad" => {
                Ok(EducationLevel::Graduate)
            }
            other => bail!(
                "Unknown education level `{other}`; expected one of middle-school, high-school, \
                 undergraduate, graduate"
            ),
        }
    }
}
