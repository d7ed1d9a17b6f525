//! Whitelisted page templates, served as text.

use std::path::PathBuf;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use crate::easy_fs::read_to_string_if_exists;
use crate::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum TemplateName {
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "blank")]
    Blank,
    #[strum(serialize = "question")]
    Question,
    #[strum(serialize = "confirmation")]
    Confirmation,
    #[strum(serialize = "cya")]
    CheckYourAnswers,
    #[strum(serialize = "guidance")]
    Guidance,
    #[strum(serialize = "step-by-step")]
    StepByStep,
}

impl TemplateName {
    /// Case-insensitive.
    pub fn maybe_from(s: &str) -> Option<Self> {
        s.to_lowercase().parse().ok()
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = TemplateName> {
        TemplateName::iter()
    }
}

/// A directory holding `<name>.njk` files.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dir: PathBuf,
}

impl TemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        TemplateStore { dir: dir.into() }
    }

    pub fn path_for(&self, name: TemplateName) -> PathBuf {
        self.dir.join(format!("{}.njk", name.as_str()))
    }

    /// The whole template text, or `None` if `name` is not one of the
    /// known templates or its file can't be read.
    pub fn load(&self, name: &str) -> Option<String> {
        let name = TemplateName::maybe_from(name)?;
        match read_to_string_if_exists(&self.path_for(name)) {
            Ok(text) => text,
            Err(e) => {
                warn!("{e:#}");
                None
            }
        }
    }
}
