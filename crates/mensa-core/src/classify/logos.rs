use crate::error::MensaError;

/// Dietary/category icon attached to a course by the feed.
///
/// Upstream tags courses with integer "course logo" ids. The ids in use are
/// a closed set; an id outside it means the feed changed under us and must
/// fail loudly instead of being dropped on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseLogo {
    Vegetarian,
    Grill,
    Soup,
    Snack,
    Salad,
}

impl CourseLogo {
    pub fn from_upstream(id: u32) -> Result<CourseLogo, MensaError> {
        let logo = match id {
            2 => CourseLogo::Vegetarian,
            4 => CourseLogo::Grill,
            9 => CourseLogo::Soup,
            11 => CourseLogo::Snack,
            14 => CourseLogo::Salad,
            _ => return Err(MensaError::UnknownCourseLogo(id)),
        };
        Ok(logo)
    }
}

const LOGO_COUNT: usize = 5;

/// Which logos appeared anywhere on one feed item, accumulated across all
/// of its courses. Multiplicity does not matter for category resolution,
/// only presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogoSet {
    present: [bool; LOGO_COUNT],
}

impl LogoSet {
    pub fn insert(&mut self, logo: CourseLogo) {
        self.present[logo as usize] = true;
    }

    pub fn contains(&self, logo: CourseLogo) -> bool {
        self.present[logo as usize]
    }

    pub fn is_empty(&self) -> bool {
        !self.present.iter().any(|p| *p)
    }
}

impl FromIterator<CourseLogo> for LogoSet {
    fn from_iter<I: IntoIterator<Item = CourseLogo>>(iter: I) -> Self {
        let mut set = LogoSet::default();
        for logo in iter {
            set.insert(logo);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_map() {
        assert_eq!(CourseLogo::from_upstream(2).unwrap(), CourseLogo::Vegetarian);
        assert_eq!(CourseLogo::from_upstream(4).unwrap(), CourseLogo::Grill);
        assert_eq!(CourseLogo::from_upstream(9).unwrap(), CourseLogo::Soup);
        assert_eq!(CourseLogo::from_upstream(11).unwrap(), CourseLogo::Snack);
        assert_eq!(CourseLogo::from_upstream(14).unwrap(), CourseLogo::Salad);
    }

    #[test]
    fn test_unknown_id_fails_loudly() {
        assert!(matches!(
            CourseLogo::from_upstream(99),
            Err(MensaError::UnknownCourseLogo(99))
        ));
    }

    #[test]
    fn test_set_tracks_presence_not_multiplicity() {
        let set: LogoSet = [CourseLogo::Grill, CourseLogo::Grill, CourseLogo::Soup]
            .into_iter()
            .collect();
        assert!(set.contains(CourseLogo::Grill));
        assert!(set.contains(CourseLogo::Soup));
        assert!(!set.contains(CourseLogo::Salad));
        assert!(!set.is_empty());
        assert!(LogoSet::default().is_empty());
    }
}
