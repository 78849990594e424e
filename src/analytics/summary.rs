//! Chart-ready bundle of every engine series

use super::moving_average::moving_average;
use super::scoring::{daily_score, performance_scores};
use super::series::{chronological, metric_series, Metric, WEEK_SPAN};
use super::weekly::weekly_average;
use crate::models::analytics::{AnalyticsSummary, DailyScore, MovingAverages, WeeklyAverages};
use crate::models::record::DailyRecord;

/// Collect the series a dashboard plots, aligned on ascending dates
pub fn summarize(records: &[DailyRecord], window: usize) -> AnalyticsSummary {
    let ordered = chronological(records);
    let ma = |metric| moving_average(&metric_series(records, metric), window);

    AnalyticsSummary {
        dates: ordered.iter().map(|r| r.date).collect(),
        daily_scores: ordered
            .iter()
            .map(|r| DailyScore {
                date: r.date,
                score: daily_score(r),
            })
            .collect(),
        moving_averages: MovingAverages {
            window: window.max(1),
            steps: ma(Metric::Steps),
            calories: ma(Metric::Calories),
            water: ma(Metric::Water),
            active: ma(Metric::Active),
        },
        weekly_averages: WeeklyAverages {
            steps: weekly_average(records, Metric::Steps, WEEK_SPAN),
            calories: weekly_average(records, Metric::Calories, WEEK_SPAN),
            water: weekly_average(records, Metric::Water, WEEK_SPAN),
            sleep: weekly_average(records, Metric::Sleep, WEEK_SPAN),
            active: weekly_average(records, Metric::Active, WEEK_SPAN),
        },
        performance_scores: performance_scores(records).as_array(),
    }
}
