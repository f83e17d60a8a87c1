//! Decides whether an animal is picked up on a given date.

use chrono::NaiveDate;

use crate::calendar::{WeekStart, weekday_of};
use crate::traits::{Animal, ExceptionLookup};

/// Whether `animal` is scheduled on `date`.
///
/// An explicit override in the animal's weekly exception wins; otherwise the
/// recurring pattern decides. Weekends are never scheduled.
pub fn is_scheduled<A, E>(animal: &A, date: NaiveDate, exceptions: &E) -> bool
where
    A: Animal,
    E: ExceptionLookup<AnimalId = A::Id>,
{
    let Some(day) = weekday_of(date) else {
        return false;
    };

    let week = WeekStart::of(date);
    let override_status = exceptions
        .exception_for(animal.id(), week)
        .and_then(|exception| exception.status_for(day));

    match override_status {
        Some(status) => status.is_scheduled(),
        None => animal.is_scheduled_on(day),
    }
}

/// Active animals scheduled on `date`, in input order.
pub fn scheduled_animals<'a, A, E>(date: NaiveDate, animals: &'a [A], exceptions: &E) -> Vec<&'a A>
where
    A: Animal,
    E: ExceptionLookup<AnimalId = A::Id>,
{
    animals
        .iter()
        .filter(|animal| animal.is_active())
        .filter(|animal| is_scheduled(*animal, date, exceptions))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WeekDay;
    use crate::exception::{DayStatus, ExceptionIndex, WeeklyException};
    use crate::geo::Coordinate;

    struct Dog {
        id: &'static str,
        days: Vec<WeekDay>,
        active: bool,
    }

    impl Animal for Dog {
        type Id = &'static str;

        fn id(&self) -> &Self::Id {
            &self.id
        }

        fn name(&self) -> &str {
            self.id
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn regular_schedule(&self) -> &[WeekDay] {
            &self.days
        }

        fn location(&self) -> Option<Coordinate> {
            None
        }
    }

    fn dog(id: &'static str, days: &[WeekDay]) -> Dog {
        Dog {
            id,
            days: days.to_vec(),
            active: true,
        }
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()
    }

    fn saturday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 15).unwrap()
    }

    #[test]
    fn test_pattern_without_exception() {
        let max = dog("max", &[WeekDay::Monday, WeekDay::Wednesday]);
        let none: ExceptionIndex<&str> = ExceptionIndex::new();
        assert!(is_scheduled(&max, monday(), &none));
        assert!(!is_scheduled(&max, monday().succ_opt().unwrap(), &none));
    }

    #[test]
    fn test_weekend_never_scheduled() {
        let every_day = dog("molly", &WeekDay::ALL);
        let forced: ExceptionIndex<&str> = ExceptionIndex::from_iter([WeeklyException::new(
            "molly",
            WeekStart::of(saturday()),
        )
        .with_status(WeekDay::Friday, DayStatus::Scheduled)]);
        assert!(!is_scheduled(&every_day, saturday(), &forced));
    }

    #[test]
    fn test_override_beats_pattern() {
        let max = dog("max", &[WeekDay::Monday]);
        let week = WeekStart::of(monday());

        for status in [
            DayStatus::Away,
            DayStatus::Injured,
            DayStatus::Cancelled,
            DayStatus::Rescheduled,
        ] {
            let exceptions: ExceptionIndex<_> =
                [WeeklyException::new("max", week).with_status(WeekDay::Monday, status)]
                    .into_iter()
                    .collect();
            assert!(!is_scheduled(&max, monday(), &exceptions), "{:?}", status);
        }

        let charlie = dog("charlie", &[WeekDay::Tuesday]);
        let extra: ExceptionIndex<_> =
            [WeeklyException::new("charlie", week).with_status(WeekDay::Monday, DayStatus::Scheduled)]
                .into_iter()
                .collect();
        assert!(is_scheduled(&charlie, monday(), &extra));
    }

    #[test]
    fn test_exception_for_other_day_falls_back() {
        let max = dog("max", &[WeekDay::Monday]);
        let exceptions: ExceptionIndex<_> = [WeeklyException::new("max", WeekStart::of(monday()))
            .with_status(WeekDay::Friday, DayStatus::Away)]
        .into_iter()
        .collect();
        assert!(is_scheduled(&max, monday(), &exceptions));
    }

    #[test]
    fn test_exception_for_other_week_ignored() {
        let max = dog("max", &[WeekDay::Monday]);
        let next_week = WeekStart::of(monday()).add_weeks(1);
        let exceptions: ExceptionIndex<_> =
            [WeeklyException::new("max", next_week).with_status(WeekDay::Monday, DayStatus::Away)]
                .into_iter()
                .collect();
        assert!(is_scheduled(&max, monday(), &exceptions));
    }

    #[test]
    fn test_scheduled_animals_skips_inactive_and_keeps_order() {
        let mut bella = dog("bella", &[WeekDay::Monday]);
        bella.active = false;
        let animals = vec![
            bella,
            dog("charlie", &[WeekDay::Tuesday]),
            dog("luna", &[WeekDay::Monday]),
            dog("max", &[WeekDay::Monday]),
        ];

        let ids: Vec<_> = scheduled_animals(monday(), &animals, &ExceptionIndex::<&str>::new())
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec!["luna", "max"]);
    }
}
