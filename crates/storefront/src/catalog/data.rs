//! Built-in demo catalog data.
//!
//! The shop ships with a fixed set of twelve products plus brand and
//! category directories. Ids and slugs are stable: the frontend links to
//! them and the cart snapshots them.

use snkrs_core::ProductId;

use super::{Brand, Category, Product};

/// All products, in shelf order.
#[must_use]
pub fn all_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Nike Air Max 90".to_string(),
            slug: "nike-air-max-90".to_string(),
            brand: "Nike".to_string(),
            price: 14990,
            image: "/products/nike-air-max-90.jpg".to_string(),
            colors: Some(vec![
                "#ffffff".to_string(),
                "#1a1a1a".to_string(),
                "#c7c7c7".to_string(),
            ]),
            badge: Some("Хит".to_string()),
            description: "Легендарные кроссовки Nike Air Max 90, ставшие иконой \
                стритвир-культуры. Видимая воздушная подушка Max Air обеспечивает \
                непревзойденную амортизацию, а классический дизайн выглядит стильно \
                в любой ситуации."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![38, 39, 40, 41, 42, 43, 44, 45],
        },
        Product {
            id: ProductId::new("2"),
            name: "Adidas Ultraboost 23".to_string(),
            slug: "adidas-ultraboost-23".to_string(),
            brand: "Adidas".to_string(),
            price: 18990,
            image: "/products/adidas-ultraboost.jpg".to_string(),
            colors: Some(vec!["#000000".to_string(), "#2d4a8c".to_string()]),
            badge: Some("Новинка".to_string()),
            description: "Революционные беговые кроссовки с технологией Boost. \
                Промежуточная подошва из материала BOOST возвращает энергию при \
                каждом шаге, а верх из Primeknit обеспечивает идеальную посадку."
                .to_string(),
            category: "running".to_string(),
            sizes: vec![39, 40, 41, 42, 43, 44],
        },
        Product {
            id: ProductId::new("3"),
            name: "Air Jordan 1 Retro High OG".to_string(),
            slug: "jordan-1-retro-high".to_string(),
            brand: "Jordan".to_string(),
            price: 21990,
            image: "/products/jordan-1-retro.jpg".to_string(),
            colors: Some(vec![
                "#c41e3a".to_string(),
                "#000000".to_string(),
                "#ffffff".to_string(),
            ]),
            badge: None,
            description: "Легендарная модель, положившая начало баскетбольной \
                культуре. Air Jordan 1 в расцветке Chicago — одна из самых \
                узнаваемых и желанных пар кроссовок в истории."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![40, 41, 42, 43, 44, 45, 46],
        },
        Product {
            id: ProductId::new("4"),
            name: "New Balance 550".to_string(),
            slug: "new-balance-550".to_string(),
            brand: "New Balance".to_string(),
            price: 15490,
            image: "/products/new-balance-550.jpg".to_string(),
            colors: Some(vec![
                "#ffffff".to_string(),
                "#2e6b30".to_string(),
                "#1a1a1a".to_string(),
            ]),
            badge: Some("Sale".to_string()),
            description: "Ретро-баскетбольные кроссовки New Balance 550, \
                вернувшиеся в моду. Чистый дизайн из натуральной кожи и \
                характерная подошва делают их идеальным выбором для повседневного \
                стиля."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![38, 39, 40, 41, 42, 43, 44],
        },
        Product {
            id: ProductId::new("5"),
            name: "Nike Dunk Low Retro".to_string(),
            slug: "nike-dunk-low-retro".to_string(),
            brand: "Nike".to_string(),
            price: 12990,
            image: "/products/nike-dunk-low.jpg".to_string(),
            colors: Some(vec!["#ffffff".to_string(), "#8b4513".to_string()]),
            badge: None,
            description: "Классические Nike Dunk Low в ретро-расцветке. \
                Изначально созданные для баскетбола, сегодня они стали \
                неотъемлемой частью скейт и стритвир-культуры."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![36, 37, 38, 39, 40, 41, 42, 43, 44],
        },
        Product {
            id: ProductId::new("6"),
            name: "Adidas Samba OG".to_string(),
            slug: "adidas-samba-og".to_string(),
            brand: "Adidas".to_string(),
            price: 11990,
            image: "/products/adidas-samba.jpg".to_string(),
            colors: Some(vec!["#ffffff".to_string(), "#000000".to_string()]),
            badge: Some("Популярное".to_string()),
            description: "Культовые Adidas Samba OG — одна из самых продаваемых \
                моделей в истории бренда. Созданные для футзала, ставшие иконой \
                уличного стиля. Натуральная кожа и характерная подошва из гевеи."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![38, 39, 40, 41, 42, 43, 44, 45],
        },
        Product {
            id: ProductId::new("7"),
            name: "Nike Air Force 1 '07".to_string(),
            slug: "nike-air-force-1".to_string(),
            brand: "Nike".to_string(),
            price: 11490,
            image: "/products/nike-air-force-1.jpg".to_string(),
            colors: Some(vec!["#ffffff".to_string()]),
            badge: None,
            description: "Легенда Nike — Air Force 1 в классическом полностью \
                белом исполнении. Технология Air в подошве, прочная кожа и \
                вневременной дизайн, который остается актуальным уже более 40 лет."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46],
        },
        Product {
            id: ProductId::new("8"),
            name: "New Balance 2002R".to_string(),
            slug: "new-balance-2002r".to_string(),
            brand: "New Balance".to_string(),
            price: 17990,
            image: "/products/new-balance-2002r.jpg".to_string(),
            colors: Some(vec!["#c4c4c4".to_string(), "#3d3d3d".to_string()]),
            badge: Some("Новинка".to_string()),
            description: "Премиальные кроссовки New Balance 2002R с системой \
                амортизации N-ERGY. Верх из замши и сетки обеспечивает комфорт, а \
                ретро-дизайн делает их стильным выбором на каждый день."
                .to_string(),
            category: "running".to_string(),
            sizes: vec![40, 41, 42, 43, 44, 45],
        },
        Product {
            id: ProductId::new("9"),
            name: "Nike Air Max 97".to_string(),
            slug: "nike-air-max-97".to_string(),
            brand: "Nike".to_string(),
            price: 16990,
            image: "/products/nike-air-max-90.jpg".to_string(),
            colors: Some(vec!["#c0c0c0".to_string(), "#ffffff".to_string()]),
            badge: None,
            description: "Вдохновленные скоростными поездами, Nike Air Max 97 \
                отличаются полноразмерной воздушной подушкой и узнаваемым \
                волнообразным дизайном. Футуристический стиль каждый день."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![39, 40, 41, 42, 43, 44, 45],
        },
        Product {
            id: ProductId::new("10"),
            name: "Adidas Forum Low".to_string(),
            slug: "adidas-forum-low".to_string(),
            brand: "Adidas".to_string(),
            price: 12490,
            image: "/products/adidas-samba.jpg".to_string(),
            colors: Some(vec!["#ffffff".to_string(), "#1e40af".to_string()]),
            badge: None,
            description: "Ретро-баскетбольные кроссовки Adidas Forum Low. \
                Характерный ремешок и чистый кожаный верх делают их элегантным \
                выбором для уличного стиля."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![38, 39, 40, 41, 42, 43, 44],
        },
        Product {
            id: ProductId::new("11"),
            name: "Jordan 4 Retro".to_string(),
            slug: "jordan-4-retro".to_string(),
            brand: "Jordan".to_string(),
            price: 24990,
            image: "/products/jordan-1-retro.jpg".to_string(),
            colors: Some(vec![
                "#000000".to_string(),
                "#808080".to_string(),
                "#ffffff".to_string(),
            ]),
            badge: Some("Лимитированная серия".to_string()),
            description: "Air Jordan 4 — модель, которую Майкл Джордан носил в \
                сезоне 1988/89. Технология видимого Air в пятке и характерные \
                крылья делают эти кроссовки узнаваемыми мгновенно."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![40, 41, 42, 43, 44, 45],
        },
        Product {
            id: ProductId::new("12"),
            name: "New Balance 574".to_string(),
            slug: "new-balance-574".to_string(),
            brand: "New Balance".to_string(),
            price: 10990,
            image: "/products/new-balance-550.jpg".to_string(),
            colors: Some(vec![
                "#4a6741".to_string(),
                "#1a1a1a".to_string(),
                "#696969".to_string(),
            ]),
            badge: None,
            description: "Классические New Balance 574 — одна из самых узнаваемых \
                моделей бренда. Комбинация замши и текстиля с амортизирующей \
                подошвой ENCAP для комфорта весь день."
                .to_string(),
            category: "lifestyle".to_string(),
            sizes: vec![36, 37, 38, 39, 40, 41, 42, 43, 44, 45],
        },
    ]
}

/// The brand directory shown in the shop filter.
#[must_use]
pub fn brands() -> Vec<Brand> {
    [
        ("Nike", "nike"),
        ("Adidas", "adidas"),
        ("Jordan", "jordan"),
        ("New Balance", "new-balance"),
        ("Puma", "puma"),
        ("Reebok", "reebok"),
    ]
    .into_iter()
    .map(|(name, slug)| Brand {
        name: name.to_string(),
        slug: slug.to_string(),
    })
    .collect()
}

/// The category directory; "Все" (all) uses an empty slug.
#[must_use]
pub fn categories() -> Vec<Category> {
    [("Все", ""), ("Лайфстайл", "lifestyle"), ("Бег", "running")]
        .into_iter()
        .map(|(name, slug)| Category {
            name: name.to_string(),
            slug: slug.to_string(),
        })
        .collect()
}
