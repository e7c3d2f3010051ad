//! Template-project configuration: placeholder substitution and the
//! one-time rename that specializes the repository.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the premake build-description file, at the repository root and
/// inside the project directory.
pub const BUILD_FILE: &str = "premake5.lua";

/// Directory whose presence marks the repository as still in template form.
/// The same literal doubles as the project-name placeholder inside the
/// build-description files.
pub const TEMPLATE_DIR: &str = "TemplateProject";

/// Namespace placeholder in the root build-description file.
pub const NAMESPACE_PLACEHOLDER: &str = "cpp-template";

/// Project-type placeholders in the template project's build-description file.
pub const TYPE_WIN_PLACEHOLDER: &str = "ProjectTypeWin";
pub const TYPE_LINUX_PLACEHOLDER: &str = "ProjectTypeLinux";

/// Binary type of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Executable,
    Library,
}

impl ProjectKind {
    /// Parse an interactive reply. Only the first character of the trimmed
    /// input counts, case-insensitively: `e` for executable, `l` for library.
    /// Anything else is `None` and the caller decides how to surface it.
    pub fn from_reply(reply: &str) -> Option<Self> {
        match reply.trim().chars().next()?.to_ascii_lowercase() {
            'e' => Some(ProjectKind::Executable),
            'l' => Some(ProjectKind::Library),
            _ => None,
        }
    }

    /// Premake target kinds for this selection, as (Windows, Linux) tokens.
    pub fn target_kinds(self) -> (&'static str, &'static str) {
        match self {
            ProjectKind::Library => ("StaticLib", "SharedLib"),
            ProjectKind::Executable => ("ConsoleApp", "ConsoleApp"),
        }
    }
}

/// Configuration operations against a repository root. The root is carried
/// explicitly; nothing here touches the process working directory.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    root: PathBuf,
}

impl ProjectConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn root_build_file(&self) -> PathBuf {
        self.root.join(BUILD_FILE)
    }

    fn template_dir(&self) -> PathBuf {
        self.root.join(TEMPLATE_DIR)
    }

    /// True while the repository is still in template form, i.e. the template
    /// project directory has not been renamed away yet. Pure check, no side
    /// effects.
    pub fn is_unconfigured(&self) -> bool {
        self.template_dir().is_dir()
    }

    /// Replace the namespace placeholder in the root build-description file.
    /// The namespace string is substituted verbatim; no validation.
    pub fn apply_namespace(&self, namespace: &str) -> Result<()> {
        replace_in_file(
            &self.root_build_file(),
            &[(NAMESPACE_PLACEHOLDER, namespace)],
        )
    }

    /// Replace the project-type placeholders in the template project's
    /// build-description file. Must run before [`finalize_rename`], while the
    /// template directory still carries its original name.
    ///
    /// [`finalize_rename`]: Self::finalize_rename
    pub fn apply_kind(&self, kind: ProjectKind) -> Result<()> {
        let (win, linux) = kind.target_kinds();
        replace_in_file(
            &self.template_dir().join(BUILD_FILE),
            &[(TYPE_WIN_PLACEHOLDER, win), (TYPE_LINUX_PLACEHOLDER, linux)],
        )
    }

    /// Rename the template project directory to the chosen project name.
    /// This consumes the template marker: afterwards the repository reports
    /// as configured, permanently.
    pub fn finalize_rename(&self, project_name: &str) -> Result<()> {
        let from = self.template_dir();
        let to = self.root.join(project_name);
        if !from.is_dir() {
            bail!("template directory '{}' not found", from.display());
        }
        if to.exists() {
            bail!("'{}' already exists, cannot rename template", to.display());
        }
        fs::rename(&from, &to).with_context(|| {
            format!("renaming '{}' to '{}'", from.display(), to.display())
        })
    }

    /// Replace the project-name placeholder in the root build-description
    /// file and in the renamed project's own build-description file. Runs
    /// after [`finalize_rename`] so the nested path resolves.
    ///
    /// [`finalize_rename`]: Self::finalize_rename
    pub fn apply_name(&self, project_name: &str) -> Result<()> {
        replace_in_file(&self.root_build_file(), &[(TEMPLATE_DIR, project_name)])?;
        replace_in_file(
            &self.root.join(project_name).join(BUILD_FILE),
            &[(TEMPLATE_DIR, project_name)],
        )
    }
}

/// Exact substring substitution, rewriting the file in place. Content with no
/// matching token is written back byte-identical.
fn replace_in_file(path: &Path, replacements: &[(&str, &str)]) -> Result<()> {
    let mut contents = fs::read_to_string(path)
        .with_context(|| format!("reading '{}'", path.display()))?;
    for (token, value) in replacements {
        contents = contents.replace(token, value);
    }
    fs::write(path, contents).with_context(|| format!("writing '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const ROOT_PREMAKE: &str = "workspace \"cpp-template\"\n\
                                \tstartproject \"TemplateProject\"\n\
                                include \"TemplateProject\"\n";

    const PROJECT_PREMAKE: &str = "project \"TemplateProject\"\n\
                                   \tfilter \"system:windows\"\n\
                                   \t\tkind \"ProjectTypeWin\"\n\
                                   \tfilter \"system:linux\"\n\
                                   \t\tkind \"ProjectTypeLinux\"\n";

    fn template_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(BUILD_FILE), ROOT_PREMAKE).unwrap();
        std::fs::create_dir(dir.path().join(TEMPLATE_DIR)).unwrap();
        std::fs::write(
            dir.path().join(TEMPLATE_DIR).join(BUILD_FILE),
            PROJECT_PREMAKE,
        )
        .unwrap();
        dir
    }

    #[test]
    fn unconfigured_iff_template_dir_present() {
        let dir = template_repo();
        let config = ProjectConfig::new(dir.path());
        assert!(config.is_unconfigured());

        config.finalize_rename("Widget").unwrap();
        assert!(!config.is_unconfigured());
    }

    #[test]
    fn namespace_substitution_leaves_other_bytes_untouched() {
        let dir = template_repo();
        let config = ProjectConfig::new(dir.path());
        config.apply_namespace("Acme").unwrap();

        let contents = std::fs::read_to_string(dir.path().join(BUILD_FILE)).unwrap();
        assert_eq!(contents, ROOT_PREMAKE.replace("cpp-template", "Acme"));
        assert!(!contents.contains(NAMESPACE_PLACEHOLDER));
    }

    #[test]
    fn namespace_accepts_empty_string() {
        let dir = template_repo();
        let config = ProjectConfig::new(dir.path());
        config.apply_namespace("").unwrap();

        let contents = std::fs::read_to_string(dir.path().join(BUILD_FILE)).unwrap();
        assert!(!contents.contains(NAMESPACE_PLACEHOLDER));
    }

    #[test]
    fn library_kind_maps_to_static_and_shared() {
        let dir = template_repo();
        let config = ProjectConfig::new(dir.path());
        config.apply_kind(ProjectKind::Library).unwrap();

        let contents =
            std::fs::read_to_string(dir.path().join(TEMPLATE_DIR).join(BUILD_FILE)).unwrap();
        assert!(contents.contains("kind \"StaticLib\""));
        assert!(contents.contains("kind \"SharedLib\""));
    }

    #[test]
    fn executable_kind_maps_to_console_app_on_both_platforms() {
        let dir = template_repo();
        let config = ProjectConfig::new(dir.path());
        config.apply_kind(ProjectKind::Executable).unwrap();

        let contents =
            std::fs::read_to_string(dir.path().join(TEMPLATE_DIR).join(BUILD_FILE)).unwrap();
        assert_eq!(contents.matches("kind \"ConsoleApp\"").count(), 2);
    }

    #[test]
    fn substitution_without_tokens_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(BUILD_FILE);
        let plain = "workspace \"Configured\"\nproject \"Done\"\n";
        std::fs::write(&file, plain).unwrap();

        let config = ProjectConfig::new(dir.path());
        config.apply_namespace("Anything").unwrap();
        config.apply_name("Other").unwrap_err(); // nested file missing
        assert_eq!(std::fs::read_to_string(&file).unwrap(), plain);
    }

    #[test]
    fn rename_fails_on_existing_target() {
        let dir = template_repo();
        std::fs::create_dir(dir.path().join("Widget")).unwrap();

        let config = ProjectConfig::new(dir.path());
        assert!(config.finalize_rename("Widget").is_err());
        assert!(config.is_unconfigured());
    }

    #[test]
    fn rename_fails_without_template_dir() {
        let dir = TempDir::new().unwrap();
        let config = ProjectConfig::new(dir.path());
        assert!(config.finalize_rename("Widget").is_err());
    }

    #[test]
    fn full_specialization_scenario() {
        let dir = template_repo();
        let config = ProjectConfig::new(dir.path());

        config.apply_namespace("Acme").unwrap();
        config.apply_kind(ProjectKind::Library).unwrap();
        config.finalize_rename("Widget").unwrap();
        config.apply_name("Widget").unwrap();

        assert!(!config.is_unconfigured());
        assert!(!dir.path().join(TEMPLATE_DIR).exists());

        let root = std::fs::read_to_string(dir.path().join(BUILD_FILE)).unwrap();
        assert!(root.contains("workspace \"Acme\""));
        assert!(root.contains("include \"Widget\""));
        assert!(!root.contains(TEMPLATE_DIR));

        let nested =
            std::fs::read_to_string(dir.path().join("Widget").join(BUILD_FILE)).unwrap();
        assert!(nested.contains("project \"Widget\""));
        assert!(nested.contains("StaticLib"));
        assert!(nested.contains("SharedLib"));
    }

    #[test]
    fn reply_parsing_takes_first_character_case_insensitively() {
        assert_eq!(ProjectKind::from_reply("e"), Some(ProjectKind::Executable));
        assert_eq!(ProjectKind::from_reply("E"), Some(ProjectKind::Executable));
        assert_eq!(ProjectKind::from_reply("  library "), Some(ProjectKind::Library));
        assert_eq!(ProjectKind::from_reply("exe"), Some(ProjectKind::Executable));
        assert_eq!(ProjectKind::from_reply("x"), None);
        assert_eq!(ProjectKind::from_reply(""), None);
        assert_eq!(ProjectKind::from_reply("   "), None);
    }
}
