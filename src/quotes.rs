//! Motivational quotes rotated on the dreams page.

use chrono::{Datelike, NaiveDate};

pub const INSPIRATIONAL_QUOTES: &[&str] = &[
    "Chaque petite économie vous rapproche de vos rêves",
    "La discipline d'aujourd'hui est la liberté de demain",
    "Vos rêves méritent votre engagement",
    "Un budget maîtrisé est un pas vers la liberté financière",
    "L'épargne n'est pas une privation, c'est un investissement en vous-même",
    "Chaque euro économisé est un euro vers votre avenir",
    "Vos objectifs financiers reflètent vos priorités de vie",
    "La patience et la persévérance transforment les rêves en réalité",
    "Un petit pas chaque jour mène à de grandes réalisations",
    "Votre futur vous remerciera pour les efforts d'aujourd'hui",
    "Les grandes choses commencent par de petites décisions",
    "Investir en soi-même, c'est le meilleur investissement",
    "La richesse, c'est d'abord une discipline, pas une chance",
    "Chaque sacrifice d'aujourd'hui construit le confort de demain",
    "Vos rêves sont à portée de main, un budget à la fois",
    "La maîtrise de soi mène à la maîtrise de sa vie",
    "Construisez votre avenir pierre par pierre",
    "Le succès financier est une habitude, pas un accident",
    "Votre détermination est votre plus grande richesse",
    "Chaque jour est une opportunité d'avancer vers vos objectifs",
];

/// Wrapping lookup for rotation widgets.
pub fn quote_by_index(index: usize) -> &'static str {
    INSPIRATIONAL_QUOTES[index % INSPIRATIONAL_QUOTES.len()]
}

/// Stable pick for a given day, so reloading the page keeps the same quote.
pub fn quote_for_date(date: NaiveDate) -> &'static str {
    quote_by_index(date.ordinal0() as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lookup_wraps_around() {
        assert_eq!(quote_by_index(0), INSPIRATIONAL_QUOTES[0]);
        assert_eq!(
            quote_by_index(INSPIRATIONAL_QUOTES.len() + 3),
            INSPIRATIONAL_QUOTES[3]
        );
    }

    #[test]
    fn daily_quote_is_stable() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(quote_for_date(date), quote_for_date(date));
    }
}
