//! 倒计时
//!
//! 计算到目标时间（本地时间）还剩多少天、时、分、秒，格式化为
//! `"{天}天 {时}时 {分}分 {秒}秒"` 写入文字显示协作者。
//!
//! 天数用毫秒差做向下取整除法；时、分、秒先对上一级单位取截断余数再向下取整。
//! 目标时间过去之后各分量变成负数，不做特殊处理。

use crate::config::{ConfigResult, CountdownConfig};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDateTime, Offset, TimeZone};
use std::fmt;

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// 剩余时间的各个分量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    /// 由毫秒差拆分
    pub fn from_millis(diff: i64) -> Self {
        Self {
            days: diff.div_euclid(DAY_MS),
            hours: (diff % DAY_MS).div_euclid(HOUR_MS),
            minutes: (diff % HOUR_MS).div_euclid(MINUTE_MS),
            seconds: (diff % MINUTE_MS).div_euclid(SECOND_MS),
        }
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}天 {}时 {}分 {}秒",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// 文字显示协作者
pub trait TextDisplay {
    fn set_text(&mut self, text: &str);
}

/// 把文字变化写入日志的显示
///
/// 每帧都会刷新，但只有文字变化时（大约每秒一次）才输出。
#[derive(Debug, Default)]
pub struct LogDisplay {
    last: String,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextDisplay for LogDisplay {
    fn set_text(&mut self, text: &str) {
        if self.last != text {
            tracing::info!(target: "countdown", "{}", text);
            self.last.clear();
            self.last.push_str(text);
        }
    }
}

/// 只保存最近一次文字的显示
#[derive(Debug, Default, Clone)]
pub struct MemoryDisplay {
    text: String,
    updates: u64,
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 被刷新的次数
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl TextDisplay for MemoryDisplay {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.updates += 1;
    }
}

/// 在给定时区里解释无时区的时间
///
/// 时钟回拨造成的重复时间取较早的一个。落在时钟拨快跳过的区间内时，
/// 用跳变前的偏移换算，结果向后顺延跳过的时长（02:30 变成 03:30）。
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let day_before = naive.checked_sub_signed(Duration::days(1)).unwrap_or(naive);
            let offset = tz.offset_from_utc_datetime(&day_before).fix();
            let utc = naive.checked_sub_offset(offset).unwrap_or(naive);
            tz.from_utc_datetime(&utc)
        }
    }
}

/// 倒计时
#[derive(Debug, Clone)]
pub struct Countdown {
    target: DateTime<Local>,
}

impl Countdown {
    pub fn new(target: DateTime<Local>) -> Self {
        Self { target }
    }

    /// 把无时区的目标时间解释为本地时间
    pub fn from_naive_local(target: NaiveDateTime) -> Self {
        Self {
            target: resolve_local(&Local, target),
        }
    }

    pub fn from_config(config: &CountdownConfig) -> ConfigResult<Self> {
        Ok(Self::from_naive_local(config.target_time()?))
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    /// 相对某一时刻的剩余时间
    pub fn remaining_at(&self, now: DateTime<Local>) -> CountdownParts {
        CountdownParts::from_millis((self.target - now).num_milliseconds())
    }

    /// 相对当前时刻的剩余时间
    pub fn remaining(&self) -> CountdownParts {
        self.remaining_at(Local::now())
    }

    /// 刷新显示
    pub fn refresh(&self, display: &mut dyn TextDisplay) {
        display.set_text(&self.remaining().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, NaiveTime};

    #[test]
    fn test_one_hour_two_minutes_three_seconds() {
        let now = Local::now();
        let target = now + Duration::hours(1) + Duration::minutes(2) + Duration::seconds(3);
        let countdown = Countdown::new(target);
        assert_eq!(countdown.remaining_at(now).to_string(), "0天 1时 2分 3秒");
    }

    #[test]
    fn test_days_and_truncation() {
        let diff = 3 * DAY_MS + 4 * HOUR_MS + 5 * MINUTE_MS + 6 * SECOND_MS + 999;
        let parts = CountdownParts::from_millis(diff);
        assert_eq!(
            parts,
            CountdownParts {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
    }

    #[test]
    fn test_past_target_goes_negative() {
        let parts = CountdownParts::from_millis(-1_500);
        assert_eq!(parts.days, -1);
        assert_eq!(parts.hours, -1);
        assert_eq!(parts.minutes, -1);
        assert_eq!(parts.seconds, -2);
        assert_eq!(parts.to_string(), "-1天 -1时 -1分 -2秒");
    }

    #[test]
    fn test_default_target_is_new_year_2025() {
        let countdown = Countdown::from_config(&CountdownConfig::default()).unwrap();
        let expected = NaiveDateTime::parse_from_str("2025-01-01T00:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        assert_eq!(countdown.target().naive_local(), expected);
    }

    #[test]
    fn test_refresh_writes_display() {
        let countdown = Countdown::new(Local::now() + Duration::days(2) + Duration::minutes(1));
        let mut display = MemoryDisplay::new();
        countdown.refresh(&mut display);
        assert!(display.text().starts_with("2天 0时 "));
        assert_eq!(display.updates(), 1);
    }

    /// 2025-03-09 02:00 从 -05:00 拨快到 -04:00 的时区
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    fn switch_utc() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 9)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap()
    }

    fn standard() -> FixedOffset {
        FixedOffset::west_opt(5 * 3600).unwrap()
    }

    fn daylight() -> FixedOffset {
        FixedOffset::west_opt(4 * 3600).unwrap()
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_time(NaiveTime::MIN))
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_start = switch_utc() + standard();
            let gap_end = switch_utc() + daylight();
            if *local < gap_start {
                LocalResult::Single(standard())
            } else if *local < gap_end {
                LocalResult::None
            } else {
                LocalResult::Single(daylight())
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_time(NaiveTime::MIN))
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < switch_utc() {
                standard()
            } else {
                daylight()
            }
        }
    }

    fn naive(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn test_skipped_local_time_moves_forward() {
        let resolved = resolve_local(&SpringForward, naive("2025-03-09T02:30:00"));
        assert_eq!(resolved.naive_local(), naive("2025-03-09T03:30:00"));
        assert_eq!(resolved.naive_utc(), naive("2025-03-09T07:30:00"));
    }

    #[test]
    fn test_ordinary_local_time_is_unchanged() {
        let before = resolve_local(&SpringForward, naive("2025-03-09T01:59:59"));
        assert_eq!(before.naive_local(), naive("2025-03-09T01:59:59"));
        assert_eq!(before.naive_utc(), naive("2025-03-09T06:59:59"));

        let after = resolve_local(&SpringForward, naive("2025-03-09T03:00:00"));
        assert_eq!(after.naive_utc(), naive("2025-03-09T07:00:00"));
    }
}
