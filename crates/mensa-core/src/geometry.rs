use crate::model::{RawCategory, WeekdaySlot};
use std::sync::LazyLock;

/// Fractional rectangle in `[0,1]` relative to a containing box, origin
/// top-left (the orientation the poster template was authored in).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracBox {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

const EDGE_TOLERANCE: f32 = 1e-4;

impl FracBox {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> FracBox {
        FracBox { x, y, w, h }
    }

    /// Whether the box stays inside the unit square with positive extent.
    pub fn is_valid(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.w > 0.0
            && self.h > 0.0
            && self.x + self.w <= 1.0 + EDGE_TOLERANCE
            && self.y + self.h <= 1.0 + EDGE_TOLERANCE
    }

    /// Compose a sub-box authored relative to this box into the coordinate
    /// space this box itself is authored in.
    pub fn compose(&self, sub: &FracBox) -> FracBox {
        FracBox {
            x: self.x + sub.x * self.w,
            y: self.y + sub.y * self.h,
            w: sub.w * self.w,
            h: sub.h * self.h,
        }
    }
}

/// Sub-region of a frame holding either a dish name or its price string for
/// one category.
#[derive(Debug, Clone)]
pub struct FrameItem {
    pub category: RawCategory,
    pub is_price: bool,
    pub area: FracBox,
}

/// Fixed rectangular region of the poster assigned to one weekday's menu
/// block, with the name/price sub-regions inside it.
#[derive(Debug, Clone)]
pub struct Frame {
    pub day: WeekdaySlot,
    pub bounds: FracBox,
    pub items: Vec<FrameItem>,
}

/// Where the validity line ("12 - 16 oktober 2020") lives on the poster.
pub const DATE_HEADER: FracBox = FracBox::new(0.05, 0.03, 0.90, 0.09);

/// The known poster template: five weekday columns (soup, meat dish, vegan
/// dish, each name over price) and a bottom strip for the grill and pasta
/// counters that run the whole week.
///
/// This table is process-wide immutable configuration. It is hand-authored;
/// a box outside the unit square is an authoring defect and fails the first
/// use loudly rather than skewing every extraction after it.
pub static POSTER_FRAMES: LazyLock<Vec<Frame>> = LazyLock::new(|| {
    let frames = build_frames();
    for frame in &frames {
        assert!(
            frame.bounds.is_valid(),
            "poster frame for {} has bounds outside the unit square: {:?}",
            frame.day,
            frame.bounds
        );
        for item in &frame.items {
            assert!(
                item.area.is_valid(),
                "frame item {} on {} lies outside its frame: {:?}",
                item.category,
                frame.day,
                item.area
            );
        }
    }
    frames
});

fn build_frames() -> Vec<Frame> {
    let weekdays = [
        WeekdaySlot::Monday,
        WeekdaySlot::Tuesday,
        WeekdaySlot::Wednesday,
        WeekdaySlot::Thursday,
        WeekdaySlot::Friday,
    ];

    let mut frames = Vec::with_capacity(weekdays.len() + 1);

    for (i, day) in weekdays.into_iter().enumerate() {
        let bounds = FracBox::new(0.030 + 0.190 * i as f32, 0.160, 0.175, 0.600);
        let mut items = Vec::with_capacity(6);
        items.extend(name_price_block(RawCategory::Soup, 0.000, 0.140));
        items.extend(name_price_block(RawCategory::Meat, 0.280, 0.220));
        items.extend(name_price_block(RawCategory::Vegan, 0.600, 0.220));
        frames.push(Frame { day, bounds, items });
    }

    // Bottom strip: grill left of center, pasta right of center.
    frames.push(Frame {
        day: WeekdaySlot::Weekly,
        bounds: FracBox::new(0.030, 0.800, 0.940, 0.150),
        items: vec![
            FrameItem {
                category: RawCategory::Grill,
                is_price: false,
                area: FracBox::new(0.020, 0.150, 0.300, 0.450),
            },
            FrameItem {
                category: RawCategory::Grill,
                is_price: true,
                area: FracBox::new(0.020, 0.620, 0.300, 0.300),
            },
            FrameItem {
                category: RawCategory::Pasta,
                is_price: false,
                area: FracBox::new(0.540, 0.150, 0.300, 0.450),
            },
            FrameItem {
                category: RawCategory::Pasta,
                is_price: true,
                area: FracBox::new(0.540, 0.620, 0.300, 0.300),
            },
        ],
    });

    frames
}

/// Name region followed by the thin price line under it, spanning the full
/// frame width.
fn name_price_block(category: RawCategory, y: f32, name_h: f32) -> [FrameItem; 2] {
    [
        FrameItem {
            category,
            is_price: false,
            area: FracBox::new(0.0, y, 1.0, name_h),
        },
        FrameItem {
            category,
            is_price: true,
            area: FracBox::new(0.0, y + name_h, 1.0, 0.060),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_scales_and_offsets() {
        let outer = FracBox::new(0.5, 0.2, 0.4, 0.5);
        let inner = FracBox::new(0.25, 0.0, 0.5, 0.2);
        let abs = outer.compose(&inner);
        assert!((abs.x - 0.6).abs() < 1e-6);
        assert!((abs.y - 0.2).abs() < 1e-6);
        assert!((abs.w - 0.2).abs() < 1e-6);
        assert!((abs.h - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_boxes_rejected() {
        assert!(!FracBox::new(0.8, 0.0, 0.3, 0.1).is_valid());
        assert!(!FracBox::new(0.0, 0.0, 0.0, 0.1).is_valid());
        assert!(!FracBox::new(-0.1, 0.0, 0.5, 0.1).is_valid());
        assert!(FracBox::new(0.0, 0.0, 1.0, 1.0).is_valid());
    }

    #[test]
    fn test_table_has_five_weekday_frames_and_a_weekly_strip() {
        let frames = &*POSTER_FRAMES;
        assert_eq!(frames.len(), 6);
        assert_eq!(
            frames
                .iter()
                .filter(|f| f.day == WeekdaySlot::Weekly)
                .count(),
            1
        );
    }

    #[test]
    fn test_every_weekday_frame_has_name_and_price_per_category() {
        for frame in POSTER_FRAMES.iter().filter(|f| f.day != WeekdaySlot::Weekly) {
            for category in [RawCategory::Soup, RawCategory::Meat, RawCategory::Vegan] {
                let names = frame
                    .items
                    .iter()
                    .filter(|i| i.category == category && !i.is_price)
                    .count();
                let prices = frame
                    .items
                    .iter()
                    .filter(|i| i.category == category && i.is_price)
                    .count();
                assert_eq!((names, prices), (1, 1), "{} on {}", category, frame.day);
            }
        }
    }

    #[test]
    fn test_composed_items_stay_inside_the_page() {
        for frame in POSTER_FRAMES.iter() {
            for item in &frame.items {
                assert!(frame.bounds.compose(&item.area).is_valid());
            }
        }
    }

    #[test]
    fn test_date_header_is_valid() {
        assert!(DATE_HEADER.is_valid());
    }
}
