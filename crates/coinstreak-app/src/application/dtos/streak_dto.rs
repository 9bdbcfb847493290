use serde::{Deserialize, Serialize};

use coinstreak_domain::calendar::{DayRecord, MonthGroup};
use coinstreak_domain::contest::{ContestStanding, RankedDepartment};
use coinstreak_domain::goal::{GoalProgress, SavingsGoal};
use coinstreak_domain::milestone::MilestoneRecord;
use coinstreak_domain::quest::DailyTask;
use coinstreak_domain::store::Product;
use coinstreak_domain::streak::StreakTally;

// ============================================================
// Calendar DTOs
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDayDto {
    pub date: String,   // YYYY-MM-DD
    pub status: String, // green / red / gray / frozen / future / out
    pub automation: bool,
}

impl From<&DayRecord> for CalendarDayDto {
    fn from(day: &DayRecord) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            status: day.status.as_str().to_string(),
            automation: day.automation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthLabelDto {
    pub key: String, // YYYY-MM
    pub label: String,
    pub start_week_index: usize,
    pub week_count: usize,
}

impl From<MonthGroup> for MonthLabelDto {
    fn from(group: MonthGroup) -> Self {
        Self {
            key: group.key,
            label: group.display_name,
            start_week_index: group.start_week_index,
            week_count: group.week_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakTallyDto {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub green_days: u32,
    pub red_days: u32,
    pub frozen_days: u32,
    pub automation_days: u32,
    pub green_rate: f64, // 0.0 - 100.0
    pub last_green_date: Option<String>,
}

impl From<&StreakTally> for StreakTallyDto {
    fn from(tally: &StreakTally) -> Self {
        Self {
            current_streak: tally.current_streak,
            longest_streak: tally.longest_streak,
            green_days: tally.counts.green,
            red_days: tally.counts.red,
            frozen_days: tally.counts.frozen,
            automation_days: tally.automation_days,
            green_rate: tally.green_rate(),
            last_green_date: tally
                .last_green_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDto {
    pub window_start: String,
    pub window_end: String,
    pub today: String,
    pub days: Vec<CalendarDayDto>,
    pub weeks: Vec<Vec<CalendarDayDto>>,
    pub months: Vec<MonthLabelDto>,
    pub tally: StreakTallyDto,
}

// ============================================================
// Milestone DTOs
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MilestoneDto {
    pub threshold_days: u32,
    pub reward: u32,
    pub reached: bool,
}

impl From<MilestoneRecord> for MilestoneDto {
    fn from(m: MilestoneRecord) -> Self {
        Self {
            threshold_days: m.threshold_days,
            reward: m.reward,
            reached: m.reached,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneProgressDto {
    pub track: String,
    pub current_days: u32,
    pub percent: f64, // 0.0 - 100.0
    pub next_milestone: Option<MilestoneDto>,
    pub previous_milestone: MilestoneDto,
    pub milestones: Vec<MilestoneDto>,
}

// ============================================================
// Goal & Store DTOs
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgressDto {
    pub product_name: String,
    pub target_price: u32,
    pub current_balance: u32,
    pub percent: u32,
    pub bar_percent: f64,
    pub remaining: u32,
    pub reached: bool,
}

impl GoalProgressDto {
    pub fn new(goal: &SavingsGoal, progress: GoalProgress) -> Self {
        Self {
            product_name: goal.product_name.clone(),
            target_price: goal.target_price,
            current_balance: goal.current_balance,
            percent: progress.percent,
            bar_percent: progress.bar_percent,
            remaining: progress.remaining,
            reached: progress.reached,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub price: u32,
    pub category: String,
    pub tag: String,
    pub affordable: bool,
    pub deficit: u32,
}

impl ProductDto {
    pub fn new(product: &Product, balance: u32) -> Self {
        let affordability = product.affordability(balance);
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.as_str().to_string(),
            tag: product.tag.clone(),
            affordable: affordability.affordable,
            deficit: affordability.deficit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreCatalogDto {
    pub filter: String,
    pub balance: u32,
    pub total_count: usize,
    pub products: Vec<ProductDto>,
}

// ============================================================
// Contest & Daily task DTOs
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentStandingDto {
    pub rank: u32,
    pub name: String,
    pub short_name: String,
    pub color: String,
    pub metric_percent: u32,
    pub participants: u32,
    pub total_employees: u32,
    pub is_current: bool,
}

impl From<&RankedDepartment> for DepartmentStandingDto {
    fn from(ranked: &RankedDepartment) -> Self {
        Self {
            rank: ranked.rank,
            name: ranked.department.name.clone(),
            short_name: ranked.department.short_name.clone(),
            color: ranked.department.color.clone(),
            metric_percent: ranked.metric_percent,
            participants: ranked.participants,
            total_employees: ranked.department.total_employees,
            is_current: ranked.department.is_current,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestStandingDto {
    pub discipline: String, // worksection / automation
    pub prize: u32,
    pub leader: Option<String>,
    pub current_rank: Option<u32>,
    pub gap_to_leader: Option<u32>,
    pub departments: Vec<DepartmentStandingDto>,
}

impl From<&ContestStanding> for ContestStandingDto {
    fn from(standing: &ContestStanding) -> Self {
        Self {
            discipline: standing.discipline.as_str().to_string(),
            prize: standing.prize,
            leader: standing
                .leader()
                .map(|r| r.department.short_name.clone()),
            current_rank: standing.current_rank,
            gap_to_leader: standing.gap_to_leader,
            departments: standing.ranking.iter().map(DepartmentStandingDto::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestDto {
    pub days_until_month_end: u32,
    pub standings: Vec<ContestStandingDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTaskDto {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub reward: u32,
    pub icon: String,
    pub progress: u32,
    pub total: u32,
    pub percent: f64, // 0.0 - 100.0
    pub completed: bool,
    pub source: String,
}

impl DailyTaskDto {
    pub fn new(task: &DailyTask, percent: f64) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            reward: task.reward,
            icon: task.icon.clone(),
            progress: task.progress,
            total: task.total,
            percent,
            completed: task.completed,
            source: task.source.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTasksDto {
    pub completed_count: usize,
    pub task_count: usize,
    pub total_reward: u32,
    pub earned_reward: u32,
    pub tasks: Vec<DailyTaskDto>,
}

// ============================================================
// Dashboard
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDto {
    pub balance: u32,
    pub calendar: CalendarDto,
    pub milestones: Vec<MilestoneProgressDto>,
    pub goal: GoalProgressDto,
    pub store: StoreCatalogDto,
    pub contest: ContestDto,
    pub daily_tasks: DailyTasksDto,
}
