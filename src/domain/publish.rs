//! Publish-time filtering and projection.
//!
//! Pure, synchronous and single-pass: the same records and the same `now`
//! always yield the same result. All I/O happens in the repositories around it.

use chrono::{DateTime, Utc};

use super::entities::{Article, PublicArticle};
use super::publish_date::{ArticleStatus, PublishDate};

/// An article waiting for its publish date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledArticle<'a> {
    pub article: &'a Article,
    pub publish_at: DateTime<Utc>,
}

/// Articles split by their status at a point in time.
///
/// Each group keeps the relative order of the input, and every input record
/// lands in exactly one group.
#[derive(Debug, Default, PartialEq)]
pub struct PublishPartition<'a> {
    pub live: Vec<&'a Article>,
    pub scheduled: Vec<ScheduledArticle<'a>>,
    pub invalid: Vec<&'a Article>,
}

impl<'a> PublishPartition<'a> {
    /// Splits `articles` into live, scheduled and invalid-date groups as of `now`.
    pub fn at(now: DateTime<Utc>, articles: &'a [Article]) -> Self {
        let mut partition = Self::default();

        for article in articles {
            match PublishDate::of(article).status_at(now) {
                ArticleStatus::Live => partition.live.push(article),
                ArticleStatus::Scheduled(publish_at) => {
                    partition.scheduled.push(ScheduledArticle { article, publish_at })
                }
                ArticleStatus::InvalidDate => partition.invalid.push(article),
            }
        }

        partition
    }

    /// Public representation of the live articles, in input order.
    pub fn project(&self) -> Vec<PublicArticle> {
        self.live.iter().map(|a| PublicArticle::from(*a)).collect()
    }

    /// Scheduled articles ordered by publish date, earliest first.
    ///
    /// Articles sharing a date keep their input order.
    pub fn scheduled_by_date(&self) -> Vec<ScheduledArticle<'a>> {
        let mut scheduled = self.scheduled.clone();
        scheduled.sort_by_key(|s| s.publish_at);
        scheduled
    }

    /// Earliest upcoming publish date, if anything is scheduled.
    pub fn next_publication(&self) -> Option<DateTime<Utc>> {
        self.scheduled.iter().map(|s| s.publish_at).min()
    }

    pub fn total(&self) -> usize {
        self.live.len() + self.scheduled.len() + self.invalid.len()
    }
}

/// Returns the public records of every article that is live at `now`.
pub fn publish_at(now: DateTime<Utc>, articles: &[Article]) -> Vec<PublicArticle> {
    articles
        .iter()
        .filter(|a| PublishDate::of(a).is_live_at(now))
        .map(PublicArticle::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::{Value, json};

    fn articles(value: Value) -> Vec<Article> {
        serde_json::from_value(value).unwrap()
    }

    fn ids(public: &[PublicArticle]) -> Vec<Value> {
        public
            .iter()
            .map(|p| p.id.clone().flatten().unwrap_or(Value::Null))
            .collect()
    }

    fn june_first() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_future_and_past_dates() {
        let input = articles(json!([
            { "id": 1 },
            { "id": 2, "publishDate": "2099-01-01" },
            { "id": 3, "publishDate": "2000-01-01" }
        ]));

        let public = publish_at(june_first(), &input);

        assert_eq!(ids(&public), vec![json!(1), json!(3)]);
    }

    #[test]
    fn test_output_preserves_input_order() {
        let input = articles(json!([
            { "id": "c", "publishDate": "2020-01-01" },
            { "id": "a" },
            { "id": "x", "publishDate": "2030-01-01" },
            { "id": "b", "publishDate": "2010-05-05" }
        ]));

        let public = publish_at(june_first(), &input);

        assert_eq!(ids(&public), vec![json!("c"), json!("a"), json!("b")]);
    }

    #[test]
    fn test_undated_records_always_included() {
        let input = articles(json!([{ "id": 1 }, { "id": 2, "publishDate": null }]));
        let epoch = Utc.timestamp_opt(0, 0).unwrap();

        assert_eq!(publish_at(epoch, &input).len(), 2);
        assert_eq!(publish_at(june_first(), &input).len(), 2);
    }

    #[test]
    fn test_unparseable_date_is_skipped_quietly() {
        let input = articles(json!([
            { "id": 1, "publishDate": "whenever" },
            { "id": 2, "publishDate": "2000-01-01" }
        ]));

        let public = publish_at(june_first(), &input);

        assert_eq!(ids(&public), vec![json!(2)]);
    }

    #[test]
    fn test_blank_dates_publish_immediately() {
        let input = articles(json!([
            { "id": 1, "publishDate": "" },
            { "id": 2, "publishDate": false },
            { "id": 3, "publishDate": 0 }
        ]));

        let public = publish_at(june_first(), &input);

        assert_eq!(ids(&public), vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_projected_fields_match_source() {
        let input = articles(json!([{
            "id": 5,
            "title": "Title",
            "intro": "Intro",
            "webPath": "/p.html",
            "imageRootPath": "/p.png",
            "category": "guides",
            "publishDate": "2001-02-03",
            "secret": "not public"
        }]));

        let public = publish_at(june_first(), &input);

        assert_eq!(public, vec![PublicArticle::from(&input[0])]);
        assert_eq!(public[0].link, input[0].web_path);
        assert_eq!(public[0].image, input[0].image_root_path);
    }

    #[test]
    fn test_later_time_never_removes_records() {
        let input = articles(json!([
            { "id": 1, "publishDate": "2024-05-01" },
            { "id": 2, "publishDate": "2024-06-15T12:00:00Z" },
            { "id": 3 },
            { "id": 4, "publishDate": "2024-07-01" },
            { "id": 5, "publishDate": "garbage" }
        ]));

        let times = [
            Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
            june_first(),
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        ];

        let mut previous: Vec<Value> = Vec::new();
        for now in times {
            let current = ids(&publish_at(now, &input));
            for id in &previous {
                assert!(current.contains(id), "{id} disappeared at {now}");
            }
            previous = current;
        }
        assert_eq!(previous, vec![json!(1), json!(2), json!(3), json!(4)]);
    }

    #[test]
    fn test_partition_groups() {
        let input = articles(json!([
            { "id": 1 },
            { "id": 2, "publishDate": "2099-01-01" },
            { "id": 3, "publishDate": "2000-01-01" },
            { "id": 4, "publishDate": "n/a" },
            { "id": 5, "publishDate": "2024-09-01" }
        ]));

        let partition = PublishPartition::at(june_first(), &input);

        assert_eq!(partition.live, vec![&input[0], &input[2]]);
        assert_eq!(partition.invalid, vec![&input[3]]);
        assert_eq!(partition.scheduled.len(), 2);
        assert_eq!(partition.scheduled[0].article, &input[1]);
        assert_eq!(partition.scheduled[1].article, &input[4]);
        assert_eq!(partition.total(), input.len());
        assert_eq!(
            partition.next_publication(),
            Some(Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(partition.project(), publish_at(june_first(), &input));
    }

    #[test]
    fn test_scheduled_by_date_earliest_first() {
        let input = articles(json!([
            { "id": "late", "publishDate": "2025-03-01" },
            { "id": "live", "publishDate": "2020-01-01" },
            { "id": "early", "publishDate": "2024-07-01" },
            { "id": "tie", "publishDate": "2025-03-01T00:00:00Z" },
            { "id": "middle", "publishDate": "2024/12/24" }
        ]));

        let partition = PublishPartition::at(june_first(), &input);
        let ordered: Vec<_> = partition
            .scheduled_by_date()
            .iter()
            .map(|s| s.article.id_label())
            .collect();

        assert_eq!(ordered, vec!["early", "middle", "late", "tie"]);
        assert_eq!(
            partition.scheduled_by_date().first().map(|s| s.publish_at),
            partition.next_publication()
        );
    }

    #[test]
    fn test_empty_input() {
        let partition = PublishPartition::at(june_first(), &[]);

        assert!(partition.project().is_empty());
        assert_eq!(partition.next_publication(), None);
        assert_eq!(partition.total(), 0);
    }
}
