use serde::{Deserialize, Serialize};

// 性别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[default]
    Male, // 男
    Female, // 女
}

impl Gender {
    pub const MALE: &'static str = "male";
    pub const FEMALE: &'static str = "female";

    pub fn zh_label(&self) -> &'static str {
        match self {
            Gender::Male => "男",
            Gender::Female => "女",
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!("无效的性别: '{s}'. 支持的取值: male, female"))
        })
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "{}", Gender::MALE),
            Gender::Female => write!(f, "{}", Gender::FEMALE),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Gender::MALE => Ok(Gender::Male),
            Gender::FEMALE => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {s}")),
        }
    }
}

/// 后端偶尔返回空串或数字编码，显示时按原始字符串处理
pub fn gender_label(raw: &str) -> &str {
    match raw {
        Gender::MALE => Gender::Male.zh_label(),
        Gender::FEMALE => Gender::Female.zh_label(),
        "" => "未知",
        other => other,
    }
}

/// 性别标签配色
pub fn gender_color(raw: &str) -> &'static str {
    match raw {
        "1" | Gender::MALE => "blue-lighten-4 text-blue-darken-2",
        "2" | Gender::FEMALE => "pink-lighten-4 text-pink-darken-2",
        _ => "grey-lighten-3",
    }
}
