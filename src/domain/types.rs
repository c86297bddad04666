// ==========================================
// 通勤车队排班辅助系统 - 领域类型定义
// ==========================================
// 职责: 基础枚举与值类型 (方向/重复规则/坐标)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 行程方向 (Planning Direction)
// ==========================================
// 出发 = 接员工去目的站点, 返程 = 送员工回家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanningDirection {
    /// 出发（上班方向）
    Depart,
    /// 返程（下班方向）
    Retour,
}

impl PlanningDirection {
    /// 转换为字符串标识（与后端接口约定一致）
    pub fn as_str(&self) -> &str {
        match self {
            PlanningDirection::Depart => "depart",
            PlanningDirection::Retour => "retour",
        }
    }
}

impl fmt::Display for PlanningDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 重复类型 (Recurrence Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurrenceType {
    /// 单次
    Unique,
    /// 每周
    Hebdomadaire,
    /// 每月
    Mensuel,
}

impl RecurrenceType {
    pub fn as_str(&self) -> &str {
        match self {
            RecurrenceType::Unique => "unique",
            RecurrenceType::Hebdomadaire => "hebdomadaire",
            RecurrenceType::Mensuel => "mensuel",
        }
    }
}

impl fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 重复规则描述
///
/// - `Unique`: 两个日期选择列表均为空
/// - `Hebdomadaire`: `jours_semaine` 为 ISO 星期编号（1=周一 .. 7=周日）
/// - `Mensuel`: `jours_mois` 为月内日期（1..31）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub recurrence_type: RecurrenceType,
    #[serde(default)]
    pub jours_semaine: Vec<u8>,
    #[serde(default)]
    pub jours_mois: Vec<u8>,
}

impl Recurrence {
    /// 单次行程的重复规则
    pub fn unique() -> Self {
        Self {
            recurrence_type: RecurrenceType::Unique,
            jours_semaine: Vec::new(),
            jours_mois: Vec::new(),
        }
    }

    /// 每周重复
    pub fn hebdomadaire(jours_semaine: Vec<u8>) -> Self {
        Self {
            recurrence_type: RecurrenceType::Hebdomadaire,
            jours_semaine,
            jours_mois: Vec::new(),
        }
    }

    /// 每月重复
    pub fn mensuel(jours_mois: Vec<u8>) -> Self {
        Self {
            recurrence_type: RecurrenceType::Mensuel,
            jours_semaine: Vec::new(),
            jours_mois,
        }
    }
}

// ==========================================
// 地理坐标 (Geo Point)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_as_str() {
        assert_eq!(PlanningDirection::Depart.as_str(), "depart");
        assert_eq!(PlanningDirection::Retour.to_string(), "retour");
    }

    #[test]
    fn test_recurrence_constructors() {
        let r = Recurrence::unique();
        assert_eq!(r.recurrence_type, RecurrenceType::Unique);
        assert!(r.jours_semaine.is_empty());

        let r = Recurrence::hebdomadaire(vec![1, 3, 5]);
        assert_eq!(r.recurrence_type, RecurrenceType::Hebdomadaire);
        assert_eq!(r.jours_semaine, vec![1, 3, 5]);

        let r = Recurrence::mensuel(vec![1, 15]);
        assert_eq!(r.recurrence_type, RecurrenceType::Mensuel);
        assert_eq!(r.jours_mois, vec![1, 15]);
    }
}
