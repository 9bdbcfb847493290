use log::info;

use crate::application::dtos::{MilestoneDto, MilestoneProgressDto};
use coinstreak_domain::milestone::compute_milestone_progress;
use coinstreak_domain::seed::{StreakKind, StreakTrack};
use coinstreak_domain::shared::DomainError;

pub(super) fn build_milestone_progress(
    track: &StreakTrack,
    kind: StreakKind,
) -> Result<MilestoneProgressDto, DomainError> {
    let summary = compute_milestone_progress(track.current_days, &track.milestones)?;

    info!(
        "[streak] milestone track={} current_days={} percent={:.2} next={:?}",
        kind.as_str(),
        track.current_days,
        summary.percent,
        summary.next_milestone.map(|m| m.threshold_days)
    );

    Ok(MilestoneProgressDto {
        track: kind.as_str().to_string(),
        current_days: track.current_days,
        percent: summary.percent,
        next_milestone: summary.next_milestone.map(MilestoneDto::from),
        previous_milestone: MilestoneDto::from(summary.previous_milestone),
        milestones: track.milestones.iter().copied().map(MilestoneDto::from).collect(),
    })
}
