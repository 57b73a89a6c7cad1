/// Sort and filter logic for the review list.
/// A pure function of the full list, the sort option and the active filters;
/// recomputed whenever any of the three change.
use crate::models::review::Review;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortOption {
    #[default]
    Rating,
    ReviewCount,
    Rent,
}

impl SortOption {
    pub fn label(self) -> &'static str {
        match self {
            SortOption::Rating => "評価順",
            SortOption::ReviewCount => "口コミ数順",
            SortOption::Rent => "家賃順",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FilterOption {
    HasParking,
    PetFriendly,
    HasAirCon,
}

impl FilterOption {
    pub const ALL: [FilterOption; 3] = [
        FilterOption::HasParking,
        FilterOption::PetFriendly,
        FilterOption::HasAirCon,
    ];

    /// The feature tag a property must carry to pass this filter.
    pub fn required_feature(self) -> &'static str {
        match self {
            FilterOption::HasParking => "駐車場付き",
            FilterOption::PetFriendly => "ペット可",
            FilterOption::HasAirCon => "エアコン",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterOption::HasParking => "駐車場あり",
            FilterOption::PetFriendly => "ペット可",
            FilterOption::HasAirCon => "エアコン付き",
        }
    }
}

/// Sorts the full list by the chosen key, then keeps only properties
/// carrying every active filter's feature tag.
///
/// Rating and review count sort descending; rent sorts ascending with
/// unknown rent treated as 0. `sort_by` is stable, so equal keys keep
/// their seed order across recomputations.
pub fn apply_sort_filters(
    reviews: &[Review],
    sort: SortOption,
    filters: &[FilterOption],
) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    match sort {
        SortOption::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::ReviewCount => sorted.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
        SortOption::Rent => sorted.sort_by_key(|r| r.rent_or_default()),
    }

    sorted.retain(|review| {
        filters
            .iter()
            .all(|f| review.has_feature(f.required_feature()))
    });
    sorted
}
