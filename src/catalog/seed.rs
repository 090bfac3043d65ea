//! Bundled Sportify merchandise list.

use crate::state::{Category, Product, ProductImage, ProductSpecs};

/// Build one seed record.
#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price_lkr: u64,
    in_stock: bool,
    categories: &[Category],
    images: &[(&str, &str)],
    specs: Option<(&str, &str)>,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_lkr,
        in_stock,
        categories: categories.to_vec(),
        images: images
            .iter()
            .map(|(src, alt)| ProductImage {
                src: (*src).to_string(),
                alt: (*alt).to_string(),
            })
            .collect(),
        specs: specs.map(|(size, material)| ProductSpecs {
            size: Some(size.to_string()),
            material: Some(material.to_string()),
        }),
    }
}

/// The twenty catalog products, newest first.
#[allow(clippy::too_many_lines)]
pub(super) fn products() -> Vec<Product> {
    vec![
        product(
            "p1",
            "Sportify Pro Cricket Bat",
            "Premium English willow bat designed for power hitters. Balanced pickup and superior edge profile.",
            45990,
            true,
            &[Category::Cricket],
            &[
                ("https://source.unsplash.com/featured/?cricket,bat", "Premium cricket bat on turf"),
                ("https://source.unsplash.com/featured/?cricket,gear", "Close-up of cricket gear"),
            ],
            Some(("Short Handle", "English Willow")),
        ),
        product(
            "p2",
            "Sportify Match Football",
            "FIFA-quality football with textured PU surface for control in wet and dry conditions.",
            12990,
            true,
            &[Category::Football],
            &[
                ("https://source.unsplash.com/featured/?football,ball", "Professional match football on grass"),
                ("https://source.unsplash.com/featured/?football,training", "Football training gear"),
            ],
            Some(("Size 5", "PU")),
        ),
        product(
            "p3",
            "Sportify Performance Basketball",
            "Indoor/outdoor composite leather ball with deep channels for enhanced grip and control.",
            10990,
            false,
            &[Category::Basketball],
            &[
                ("https://source.unsplash.com/featured/?basketball,ball", "Composite leather basketball on court"),
                ("https://source.unsplash.com/featured/?basketball,court", "Basketball court hoop"),
            ],
            Some(("7", "Composite Leather")),
        ),
        product(
            "p4",
            "Sportify Aero Tennis Racket",
            "Aerodynamic frame with responsive string pattern for precision and power.",
            36990,
            true,
            &[Category::Tennis],
            &[
                ("https://source.unsplash.com/featured/?tennis,racquet", "Modern tennis racket on clay court"),
                ("https://source.unsplash.com/featured/?tennis,strings", "Tennis racket strings close-up"),
            ],
            Some(("Grip 3", "Graphite")),
        ),
        product(
            "p5",
            "Sportify Tempo Running Shoes",
            "Lightweight trainers with responsive foam midsole and breathable mesh upper.",
            27990,
            true,
            &[Category::Running],
            &[
                ("https://source.unsplash.com/featured/?running,shoes", "Lightweight running shoes on track"),
                ("https://source.unsplash.com/featured/?runner,shoe", "Runner tying shoes"),
            ],
            Some(("EU 40–46", "Mesh/Synthetic")),
        ),
        product(
            "p6",
            "Sportify Elite Gym Gloves",
            "Padded palm gloves with breathable back for superior grip during lifts and workouts.",
            4990,
            true,
            &[Category::Fitness, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?gym,gloves", "Gym gloves on dumbbell rack"),
                ("https://source.unsplash.com/featured/?fitness,gear", "Fitness accessories"),
            ],
            Some(("S/M/L/XL", "Neoprene/Leather")),
        ),
        product(
            "p7",
            "Sportify Hydro Bottle 1L",
            "Insulated stainless-steel bottle keeps drinks cold for 24h; leak-proof sport cap.",
            5990,
            true,
            &[Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?sports,water-bottle", "Steel sports water bottle"),
                ("https://source.unsplash.com/featured/?bottle,stainless", "Insulated bottle detail"),
            ],
            Some(("1000 ml", "Stainless Steel")),
        ),
        product(
            "p8",
            "Sportify Club Football Boots",
            "Firm-ground boots with molded studs for traction and a snug, supportive fit.",
            21990,
            false,
            &[Category::Football, Category::Running],
            &[
                ("https://source.unsplash.com/featured/?football,boots", "Football boots on pitch"),
                ("https://source.unsplash.com/featured/?soccer,cleats", "Soccer cleats detail"),
            ],
            Some(("EU 39–45", "Synthetic")),
        ),
        product(
            "p9",
            "Sportify Slam Basketball Shoes",
            "High-top cushioning with lateral support for aggressive cuts and landings.",
            31990,
            true,
            &[Category::Basketball],
            &[
                ("https://source.unsplash.com/featured/?basketball,shoes", "Basketball shoes on hardwood floor"),
                ("https://source.unsplash.com/featured/?basketball,sneakers", "Basketball sneakers detail"),
            ],
            Some(("EU 41–47", "Knit/Synthetic")),
        ),
        product(
            "p10",
            "Sportify Spin Tennis Balls (4pk)",
            "Pressurized felt balls engineered for extended play and consistent bounce.",
            2990,
            true,
            &[Category::Tennis],
            &[
                ("https://source.unsplash.com/featured/?tennis,balls", "Can of tennis balls"),
                ("https://source.unsplash.com/featured/?tennis,practice", "Tennis practice balls"),
            ],
            Some(("Standard", "Felt/Rubber")),
        ),
        product(
            "p11",
            "Sportify Pro Cricket Pads",
            "Lightweight protective pads with high-density foam and ergonomic straps.",
            14990,
            true,
            &[Category::Cricket],
            &[
                ("https://source.unsplash.com/featured/?cricket,pads", "Cricket leg pads on field"),
                ("https://source.unsplash.com/featured/?cricket,protective", "Cricket protective gear"),
            ],
            Some(("Adult", "HD Foam")),
        ),
        product(
            "p12",
            "Sportify Matchday Jersey",
            "Breathable, sweat-wicking jersey available in team colors with slim athletic cut.",
            9990,
            true,
            &[Category::Football, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?football,jersey", "Sport jersey on hanger"),
                ("https://source.unsplash.com/featured/?sports,jersey", "Team jersey close-up"),
            ],
            Some(("S–XXL", "Polyester")),
        ),
        product(
            "p13",
            "Sportify Yoga Mat Pro",
            "Grippy, cushioned mat for studio and home practice with closed-cell surface.",
            8990,
            false,
            &[Category::Fitness],
            &[
                ("https://source.unsplash.com/featured/?yoga,mat", "Premium yoga mat rolled"),
                ("https://source.unsplash.com/featured/?fitness,mat", "Workout mat close-up"),
            ],
            Some(("183x66 cm", "TPE")),
        ),
        product(
            "p14",
            "Sportify Speed Rope",
            "Adjustable steel cable rope with precision bearings for fast double-unders.",
            3490,
            true,
            &[Category::Fitness, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?jump,rope", "Speed jump rope on gym floor"),
                ("https://source.unsplash.com/featured/?fitness,rope", "Speed rope handles"),
            ],
            Some(("Adjustable", "Steel/Aluminum")),
        ),
        product(
            "p15",
            "Sportify Compression Socks",
            "Graduated compression improves circulation and recovery during long runs.",
            3490,
            true,
            &[Category::Running, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?running,socks", "Compression socks on runner"),
                ("https://source.unsplash.com/featured/?sports,socks", "Black compression socks"),
            ],
            Some(("S–XL", "Nylon/Spandex")),
        ),
        product(
            "p16",
            "Sportify Defender Shin Guards",
            "Impact-absorbing guards with secure straps and breathable padding.",
            5990,
            true,
            &[Category::Football, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?soccer,shin-guards", "Football shin guards"),
                ("https://source.unsplash.com/featured/?football,protective", "Protective shin gear"),
            ],
            Some(("Adult", "Foam/Plastic")),
        ),
        product(
            "p17",
            "Sportify All-Court Tennis Bag",
            "6-racket bag with ventilated shoe pocket and accessory compartments.",
            14990,
            false,
            &[Category::Tennis, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?tennis,bag", "Tennis racket bag courtside"),
                ("https://source.unsplash.com/featured/?sports,bag", "Sports gear bag"),
            ],
            Some(("30L", "Polyester")),
        ),
        product(
            "p18",
            "Sportify Court Basketball Jersey",
            "Lightweight mesh jersey with sweat-wicking fabric and classic court fit.",
            11990,
            true,
            &[Category::Basketball, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?basketball,jersey", "Basketball jersey on court"),
                ("https://source.unsplash.com/featured/?sports,mesh", "Mesh jersey texture"),
            ],
            Some(("S–XXL", "Polyester")),
        ),
        product(
            "p19",
            "Sportify Pace Running Cap",
            "Featherlight cap with laser-cut ventilation and moisture-wicking band.",
            4490,
            true,
            &[Category::Running, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?running,cap", "Breathable running cap"),
                ("https://source.unsplash.com/featured/?sports,cap", "Sport cap side view"),
            ],
            Some(("One Size", "Polyester")),
        ),
        product(
            "p20",
            "Sportify Pro Cricket Gloves",
            "Split-finger design with premium leather palm for grip and comfort at the crease.",
            11990,
            true,
            &[Category::Cricket, Category::Accessories],
            &[
                ("https://source.unsplash.com/featured/?cricket,gloves", "Cricket batting gloves"),
                ("https://source.unsplash.com/featured/?sports,gloves", "Close-up of sports gloves"),
            ],
            Some(("Adult", "Leather/Foam")),
        ),
    ]
}
