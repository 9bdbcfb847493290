use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

/// One department taking part in the monthly inter-department contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub short_name: String,
    pub color: String,
    pub employees_using: u32,
    pub total_employees: u32,
    pub usage_percent: u32, // automation usage
    pub ws_percent: u32,    // time tracked in Worksection
    #[serde(default)]
    pub is_current: bool,
}

impl Department {
    pub fn new(
        name: impl Into<String>,
        short_name: impl Into<String>,
        color: impl Into<String>,
        employees: (u32, u32),
        usage_percent: u32,
        ws_percent: u32,
    ) -> Self {
        let (employees_using, total_employees) = employees;
        Self {
            name: name.into(),
            short_name: short_name.into(),
            color: color.into(),
            employees_using,
            total_employees,
            usage_percent,
            ws_percent,
            is_current: false,
        }
    }

    pub fn current(mut self) -> Self {
        self.is_current = true;
        self
    }
}

/// Contest column: which metric departments are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestDiscipline {
    Worksection,
    Automation,
}

impl ContestDiscipline {
    pub const ALL: [ContestDiscipline; 2] =
        [ContestDiscipline::Worksection, ContestDiscipline::Automation];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContestDiscipline::Worksection => "worksection",
            ContestDiscipline::Automation => "automation",
        }
    }

    /// Coins each member of the winning department receives.
    pub fn prize(&self) -> u32 {
        match self {
            ContestDiscipline::Worksection => 150,
            ContestDiscipline::Automation => 200,
        }
    }

    pub fn metric(&self, department: &Department) -> u32 {
        match self {
            ContestDiscipline::Worksection => department.ws_percent,
            ContestDiscipline::Automation => department.usage_percent,
        }
    }

    /// Employees counted as taking part.
    pub fn participants(&self, department: &Department) -> u32 {
        match self {
            // Rounded half up, same as the share shown next to the bar
            ContestDiscipline::Worksection => {
                (department.ws_percent * department.total_employees + 50) / 100
            }
            ContestDiscipline::Automation => department.employees_using,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedDepartment {
    pub rank: u32, // 1-based
    pub department: Department,
    pub metric_percent: u32,
    pub participants: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestStanding {
    pub discipline: ContestDiscipline,
    pub prize: u32,
    pub ranking: Vec<RankedDepartment>,
    pub current_rank: Option<u32>,
    /// Percentage points between the leader and the current department.
    /// `None` when the current department leads or none is marked current.
    pub gap_to_leader: Option<u32>,
}

impl ContestStanding {
    pub fn leader(&self) -> Option<&RankedDepartment> {
        self.ranking.first()
    }
}

pub fn validate_departments(departments: &[Department]) -> Result<(), DomainError> {
    for department in departments {
        if department.total_employees == 0 {
            return Err(DomainError::Validation(format!(
                "department '{}' has no employees",
                department.short_name
            )));
        }
        if department.employees_using > department.total_employees {
            return Err(DomainError::Validation(format!(
                "department '{}' has {} of {} employees using automation",
                department.short_name, department.employees_using, department.total_employees
            )));
        }
        if department.usage_percent > 100 || department.ws_percent > 100 {
            return Err(DomainError::Validation(format!(
                "department '{}' has a percentage above 100",
                department.short_name
            )));
        }
    }

    if departments.iter().filter(|d| d.is_current).count() > 1 {
        return Err(DomainError::Validation(
            "more than one department is marked as current".to_string(),
        ));
    }

    Ok(())
}

/// Rank departments by the discipline's metric, highest first.
///
/// Ties keep their input order.
pub fn rank_departments(
    departments: &[Department],
    discipline: ContestDiscipline,
) -> Result<ContestStanding, DomainError> {
    validate_departments(departments)?;

    let mut sorted: Vec<&Department> = departments.iter().collect();
    sorted.sort_by_key(|d| std::cmp::Reverse(discipline.metric(d)));

    let ranking: Vec<RankedDepartment> = sorted
        .into_iter()
        .zip(1u32..)
        .map(|(department, rank)| RankedDepartment {
            rank,
            metric_percent: discipline.metric(department),
            participants: discipline.participants(department),
            department: department.clone(),
        })
        .collect();

    let current = ranking.iter().find(|r| r.department.is_current);
    let current_rank = current.map(|r| r.rank);
    let gap_to_leader = match (ranking.first(), current) {
        (Some(leader), Some(current)) if current.rank != 1 => {
            Some(leader.metric_percent.saturating_sub(current.metric_percent))
        }
        _ => None,
    };

    Ok(ContestStanding {
        discipline,
        prize: discipline.prize(),
        ranking,
        current_rank,
        gap_to_leader,
    })
}

/// Days left in `today`'s month, today excluded.
pub fn days_until_month_end(today: NaiveDate) -> Result<u32, DomainError> {
    let (year, month) = match today.month() {
        12 => (today.year() + 1, 1),
        m => (today.year(), m + 1),
    };

    let next_month = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        DomainError::InvalidRange(format!("no month follows {} in the calendar", today))
    })?;

    Ok((next_month - today).num_days() as u32 - 1)
}
