use crate::utils::error::{KataError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_single_line, Validate,
};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub batch: Option<BatchInfo>,
    #[serde(default)]
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

/// One operation call, tagged by `kind` in the TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Case {
    Prefix { words: Vec<String> },
    Palindrome { number: i32 },
    Roman { numeral: String },
    Calc { line: String },
}

impl Case {
    pub fn kind(&self) -> &'static str {
        match self {
            Case::Prefix { .. } => "prefix",
            Case::Palindrome { .. } => "palindrome",
            Case::Roman { .. } => "roman",
            Case::Calc { .. } => "calc",
        }
    }
}

impl BatchConfig {
    /// 從 TOML 檔案載入批次
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析批次
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${KATA_WORD})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }

    pub fn name(&self) -> &str {
        self.batch.as_ref().map(|b| b.name.as_str()).unwrap_or("unnamed")
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_list("cases", &self.cases)?;

        for (index, case) in self.cases.iter().enumerate() {
            match case {
                Case::Prefix { words } => {
                    validate_non_empty_list(&format!("cases[{}].words", index), words)?
                }
                Case::Roman { numeral } => {
                    validate_non_empty_string(&format!("cases[{}].numeral", index), numeral)?
                }
                Case::Calc { line } => {
                    validate_single_line(&format!("cases[{}].line", index), line)?
                }
                Case::Palindrome { .. } => {}
            }
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
