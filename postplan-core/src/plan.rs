//! Weekly plan generation.

use chrono::{Datelike, Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::content;
use crate::post::{ContentType, Platform, PostRecord, PostStatus, Tone, DEFAULT_TIME};

/// The Monday of the week containing `d`.
pub fn start_of_week(d: NaiveDate) -> NaiveDate {
    d - Duration::days(i64::from(d.weekday().num_days_from_monday()))
}

/// Generate a week of posts.
///
/// For each platform, picks `posts_per_week` distinct days out of the 7-day
/// window starting at `week_start` (uniformly, by shuffling the offsets and
/// keeping a sorted prefix), draws a content type per day, and synthesizes
/// title/body/hashtags. `posts_per_week` is clamped to 1..=7, never rejected.
///
/// The result is sorted by `(date, time, platform)` ascending. All
/// randomness comes from `rng`; a seeded `StdRng` reproduces a plan exactly.
pub fn generate(
    week_start: NaiveDate,
    platforms: &[Platform],
    posts_per_week: u8,
    tone: Tone,
    rng: &mut impl Rng,
) -> Vec<PostRecord> {
    let per_platform = posts_per_week.clamp(1, 7) as usize;
    let mut records = Vec::with_capacity(platforms.len() * per_platform);

    for platform in platforms {
        let mut offsets: Vec<i64> = (0..7).collect();
        offsets.shuffle(rng);
        let mut chosen = offsets[..per_platform].to_vec();
        chosen.sort_unstable();

        for offset in chosen {
            let date = week_start + Duration::days(offset);
            let content_type = content::pick(rng, &ContentType::ALL);

            records.push(PostRecord {
                date: date.format("%Y-%m-%d").to_string(),
                time: DEFAULT_TIME.to_string(),
                platform: platform.as_str().to_string(),
                content_type: content_type.as_str().to_string(),
                title: content::title_for(content_type.as_str(), rng),
                body: content::body_for(content_type.as_str(), tone, rng),
                hashtags: content::hashtags_for(content_type.as_str(), platform.as_str()),
                status: PostStatus::Draft.as_str().to_string(),
            });
        }
    }

    sort_records(&mut records);
    records
}

/// Sort records by `(date, time, platform)` ascending. Stable, so records
/// with identical keys keep their insertion order.
pub fn sort_records(records: &mut [PostRecord]) {
    records.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.time.cmp(&b.time))
            .then_with(|| a.platform.cmp(&b.platform))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn start_of_week_snaps_to_monday() {
        // 2024-01-01 is a Monday
        assert_eq!(start_of_week(monday()), monday());
        let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        assert_eq!(start_of_week(wednesday), monday());
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(start_of_week(sunday), monday());
        // Idempotent
        assert_eq!(start_of_week(start_of_week(sunday)), monday());
    }

    #[test]
    fn generates_count_within_window_with_distinct_days() {
        let platforms = [Platform::Vk, Platform::Telegram, Platform::Instagram];
        let mut rng = StdRng::seed_from_u64(42);
        let records = generate(monday(), &platforms, 3, Tone::Expert, &mut rng);

        assert_eq!(records.len(), 9);
        for platform in &platforms {
            let dates: Vec<&str> = records
                .iter()
                .filter(|r| r.platform == platform.as_str())
                .map(|r| r.date.as_str())
                .collect();
            assert_eq!(dates.len(), 3);
            let distinct: HashSet<&&str> = dates.iter().collect();
            assert_eq!(distinct.len(), 3, "duplicate day for {platform}");
            for d in dates {
                assert!(("2024-01-01".."2024-01-08").contains(&d), "out of window: {d}");
            }
        }
    }

    #[test]
    fn full_week_covers_every_day() {
        let mut rng = StdRng::seed_from_u64(1);
        let records = generate(monday(), &[Platform::Vk], 7, Tone::Friendly, &mut rng);

        assert_eq!(records.len(), 7);
        let expected: Vec<String> = (1..=7).map(|d| format!("2024-01-{d:02}")).collect();
        let dates: Vec<&str> = records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, expected);
        assert!(records.iter().all(|r| r.time == "09:00"));
        assert!(records.iter().all(|r| r.status == "Draft"));
        assert!(records.iter().all(|r| r.platform == "VK"));
    }

    #[test]
    fn posts_per_week_is_clamped() {
        let mut rng = StdRng::seed_from_u64(5);
        let low = generate(monday(), &[Platform::Vk], 0, Tone::Expert, &mut rng);
        assert_eq!(low.len(), 1);

        let high = generate(monday(), &[Platform::Vk], 200, Tone::Expert, &mut rng);
        assert_eq!(high.len(), 7);
    }

    #[test]
    fn output_is_sorted_and_resort_is_a_noop() {
        let platforms = [Platform::Telegram, Platform::Vk, Platform::Instagram];
        let mut rng = StdRng::seed_from_u64(1234);
        let records = generate(monday(), &platforms, 5, Tone::LightHumor, &mut rng);

        let mut resorted = records.clone();
        sort_records(&mut resorted);
        assert_eq!(records, resorted);

        for pair in records.windows(2) {
            let a = (&pair[0].date, &pair[0].time, &pair[0].platform);
            let b = (&pair[1].date, &pair[1].time, &pair[1].platform);
            assert!(a <= b, "not sorted: {a:?} > {b:?}");
        }
    }

    #[test]
    fn same_seed_reproduces_the_plan() {
        let platforms = [Platform::Vk, Platform::Telegram];
        let a = generate(
            monday(),
            &platforms,
            4,
            Tone::Expert,
            &mut StdRng::seed_from_u64(7),
        );
        let b = generate(
            monday(),
            &platforms,
            4,
            Tone::Expert,
            &mut StdRng::seed_from_u64(7),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn generated_values_come_from_the_closed_sets() {
        let mut rng = StdRng::seed_from_u64(2024);
        let records = generate(monday(), &Platform::ALL, 7, Tone::Expert, &mut rng);

        for rec in &records {
            assert!(Platform::parse(&rec.platform).is_some());
            assert!(ContentType::parse(&rec.content_type).is_some());
            assert!(PostStatus::parse(&rec.status).is_some());
            assert!(!rec.title.is_empty());
            assert_eq!(rec.body.lines().count(), 4);
            assert!(rec.hashtags.starts_with("#недвижимость"));
        }
    }
}
