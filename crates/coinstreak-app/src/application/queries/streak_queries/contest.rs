use log::info;

use crate::application::dtos::{ContestDto, ContestStandingDto};
use coinstreak_domain::contest::{days_until_month_end, rank_departments, ContestDiscipline};
use coinstreak_domain::seed::StreakSeed;
use coinstreak_domain::shared::DomainError;

pub(super) fn build_contest(seed: &StreakSeed) -> Result<ContestDto, DomainError> {
    let standings = ContestDiscipline::ALL
        .iter()
        .map(|&discipline| {
            let standing = rank_departments(&seed.departments, discipline)?;

            info!(
                "[streak] contest discipline={} leader={:?} current_rank={:?} gap={:?}",
                discipline.as_str(),
                standing.leader().map(|r| r.department.short_name.as_str()),
                standing.current_rank,
                standing.gap_to_leader
            );

            Ok(ContestStandingDto::from(&standing))
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    Ok(ContestDto {
        days_until_month_end: days_until_month_end(seed.calendar.today)?,
        standings,
    })
}
