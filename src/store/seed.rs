//! Built-in dataset mirroring what the studio CMS will serve.

use crate::domain::{Article, ArticleBlock, ArticleMetadata, Author, Category, GalleryImage, Project};

const ASSET_HOST: &str = "https://ext.same-assets.com/2157074176";

fn asset(name: &str) -> String {
    format!("{}/{}", ASSET_HOST, name)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Gallery images are all delivered at 1200x800
fn gallery(src: &str, alt: &str) -> GalleryImage {
    GalleryImage::new(asset(src), alt, 1200, 800)
}

pub fn authors() -> Vec<Author> {
    vec![
        Author::new("sophie-laurent", "Sophie Laurent", "Design Director")
            .with_avatar(asset("3112358940.jpeg")),
        Author::new("thomas-renaud", "Thomas Renaud", "Creative Strategist")
            .with_avatar(asset("3994874011.jpeg")),
        Author::new("claire-fontaine", "Claire Fontaine", "Lighting Designer")
            .with_avatar(asset("2397584072.jpeg")),
        Author::new("jean-michel-dubois", "Jean-Michel Dubois", "Exhibition Designer")
            .with_avatar(asset("3049481759.jpeg")),
    ]
}

pub fn categories() -> Vec<Category> {
    [
        ("retail-design", "Retail Design", "Creating meaningful retail environments and experiences"),
        ("sustainability", "Sustainability", "Sustainable practices and materials in design"),
        ("architecture", "Architecture", "Architectural concepts, projects, and innovations"),
        ("exhibitions", "Exhibitions", "Exhibition design and visitor experiences"),
        ("event-design", "Event Design", "Designing memorable events and experiences"),
        ("product-design", "Product Design", "Innovative product design and development"),
        ("interior-design", "Interior Design", "Interior spaces and environments"),
        ("installation", "Installation", "Art and design installations"),
    ]
    .into_iter()
    .map(|(slug, name, description)| Category::new(slug, name, slug).with_description(description))
    .collect()
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            meta: ArticleMetadata {
                id: "designing-retail-experiences".into(),
                slug: "designing-retail-experiences".into(),
                title: "Designing Retail Experiences for the Post-COVID Era".into(),
                excerpt: "How retail spaces are evolving to meet new consumer expectations in a changing world.".into(),
                date: "May 12, 2024".into(),
                read_time: "8 min read".into(),
                category: "retail-design".into(),
                author: "sophie-laurent".into(),
                hero_image: asset("580234126.jpeg"),
                featured: true,
                tags: strings(&["retail", "post-covid", "design", "experience"]),
            },
            content: vec![
                ArticleBlock::text("The retail landscape has undergone a seismic shift in recent years, accelerated by the global pandemic. As we emerge into this new era, retail design faces unprecedented challenges and opportunities. This article explores how physical retail spaces are being reimagined to thrive in the post-COVID world, balancing safety concerns with the fundamental human desire for connection and experience."),
                ArticleBlock::heading("The Evolution of Retail Spaces"),
                ArticleBlock::text("For decades, retail design was driven by a single goal: maximize sales per square foot. Today, this metric alone is insufficient. Modern retail spaces must now balance efficiency with experience, safety with socialization, and digital integration with tactile discovery. The most successful retail environments now act as brand embassies rather than mere transaction points."),
                ArticleBlock::image(
                    asset("2730139936.jpeg"),
                    "Modern retail space with spacious layout",
                    "Spacious layouts with natural materials create a sense of safety and well-being",
                ),
                ArticleBlock::heading("Blending Digital and Physical"),
                ArticleBlock::text("The line between e-commerce and physical retail continues to blur. Smart fitting rooms, augmented reality displays, and mobile integration points are becoming standard features of forward-thinking retail spaces. The most successful designs use technology to enhance rather than replace the physical experience, recognizing that digital tools work best when they solve real friction points in the customer journey."),
                ArticleBlock::quote(
                    "The future of retail is not physical or digital\u{2014}it's a harmonious blend of both, creating experiences that can't be replicated online while embracing the convenience that technology provides.",
                    "Marc Dubois, Retail Innovation Director",
                ),
                ArticleBlock::image(
                    asset("2717469035.jpeg"),
                    "Interactive digital display in retail setting",
                    "Interactive displays enhance product exploration while minimizing physical contact",
                ),
                ArticleBlock::heading("Flexibility and Adaptability"),
                ArticleBlock::text("Perhaps the most important lesson from recent years is the value of adaptability. Retail spaces that can quickly transform to meet changing needs and circumstances demonstrate resilience. Modular fixtures, movable partitions, and multi-purpose areas allow retailers to pivot quickly\u{2014}whether for social distancing requirements, seasonal changes, or special events."),
                ArticleBlock::heading("Looking Forward"),
                ArticleBlock::text("The retailers who will thrive in this new landscape are those who view recent disruptions not as temporary inconveniences but as catalysts for meaningful innovation. By embracing human-centered design principles, thoughtful technology integration, and flexible spatial concepts, brands can create retail experiences that resonate deeply with post-pandemic consumers."),
            ],
            related_articles: strings(&["sustainable-materials", "future-of-exhibitions"]),
        },
        Article {
            meta: ArticleMetadata {
                id: "sustainable-materials".into(),
                slug: "sustainable-materials".into(),
                title: "Sustainable Materials in Event Design".into(),
                excerpt: "Exploring how the use of eco-friendly materials can create more meaningful and environmentally responsible event experiences.".into(),
                date: "April 3, 2024".into(),
                read_time: "6 min read".into(),
                category: "sustainability".into(),
                author: "thomas-renaud".into(),
                hero_image: asset("1768823742.jpeg"),
                featured: false,
                tags: strings(&["sustainability", "events", "materials", "eco-friendly"]),
            },
            content: vec![
                ArticleBlock::text("In an era of increasing environmental awareness, event design is undergoing a profound transformation. Sustainable materials are no longer just a nice-to-have feature but a central consideration in creating meaningful, responsible experiences. This shift represents both a challenge and an opportunity for designers to innovate while minimizing environmental impact."),
                ArticleBlock::heading("Beyond Greenwashing"),
                ArticleBlock::text("True sustainability in event design goes far beyond token gestures. It requires a holistic approach that considers the entire lifecycle of materials\u{2014}from sourcing and manufacturing to use, reuse, and eventual disposal. This comprehensive perspective is essential for creating events that genuinely reflect environmental values rather than merely projecting an eco-friendly image."),
                ArticleBlock::heading("Material Innovations"),
                ArticleBlock::text("The range of sustainable materials available to event designers has expanded dramatically in recent years. From biodegradable structures to recycled fabrics and compostable signage, the options for creating low-impact experiences continue to grow. These innovations allow designers to maintain high aesthetic standards while significantly reducing environmental footprint."),
                ArticleBlock::image(
                    asset("1087224454.jpeg"),
                    "Sustainable materials display",
                    "Innovative sustainable materials create visual impact while minimizing environmental harm",
                ),
                ArticleBlock::text("At ArtPill Studio, we're continually exploring and integrating these materials into our event designs, finding that sustainability often leads to more creative, distinctive solutions rather than limiting our options."),
            ],
            related_articles: strings(&["designing-retail-experiences", "architectural-lighting"]),
        },
        Article {
            meta: ArticleMetadata {
                id: "architectural-lighting".into(),
                slug: "architectural-lighting".into(),
                title: "The Art of Architectural Lighting".into(),
                excerpt: "How lighting transforms spatial experience and creates distinctive atmospheres in modern architecture.".into(),
                date: "March 18, 2024".into(),
                read_time: "7 min read".into(),
                category: "architecture".into(),
                author: "claire-fontaine".into(),
                hero_image: asset("2717469035.jpeg"),
                featured: false,
                tags: strings(&["architecture", "lighting", "design", "atmosphere"]),
            },
            content: vec![
                ArticleBlock::text("Architectural lighting stands at the fascinating intersection of technical precision and artistic expression. Far more than mere illumination, thoughtful lighting design has the power to completely transform how we perceive and experience space, influencing everything from our emotional response to our understanding of spatial dimensions and architectural intent."),
                ArticleBlock::text("This article explores how contemporary lighting design is shaping modern architecture, examining both the technical advancements and the creative approaches that define excellence in this field."),
            ],
            related_articles: strings(&["sustainable-materials", "future-of-exhibitions"]),
        },
        Article {
            meta: ArticleMetadata {
                id: "future-of-exhibitions".into(),
                slug: "future-of-exhibitions".into(),
                title: "The Future of Exhibitions: Blending Physical and Digital".into(),
                excerpt: "Emerging trends shaping how we design and experience exhibitions in an increasingly connected world.".into(),
                date: "February 24, 2024".into(),
                read_time: "9 min read".into(),
                category: "exhibitions".into(),
                author: "jean-michel-dubois".into(),
                hero_image: asset("1533142913.jpeg"),
                featured: true,
                tags: strings(&["exhibitions", "digital", "technology", "hybrid"]),
            },
            content: vec![
                ArticleBlock::text("Exhibition design is undergoing a revolutionary transformation as digital technologies create new possibilities for engagement, education, and immersion. The traditional boundaries between physical installations and digital experiences are dissolving, giving rise to hybrid exhibitions that offer the best of both worlds."),
                ArticleBlock::text("This article examines how these emerging approaches are reshaping visitor experiences and offering designers unprecedented creative freedom."),
            ],
            related_articles: strings(&["designing-retail-experiences", "architectural-lighting"]),
        },
        Article {
            meta: ArticleMetadata {
                id: "luxury-hospitality-design".into(),
                slug: "luxury-hospitality-design".into(),
                title: "Redefining Luxury in Hospitality Design".into(),
                excerpt: "How the concept of luxury is evolving in hospitality spaces to meet changing expectations and values.".into(),
                date: "January 15, 2024".into(),
                read_time: "10 min read".into(),
                category: "interior-design".into(),
                author: "sophie-laurent".into(),
                hero_image: asset("2618432853.jpeg"),
                featured: false,
                tags: strings(&["hospitality", "luxury", "design", "experience"]),
            },
            content: vec![
                ArticleBlock::text("The definition of luxury is undergoing a profound transformation in hospitality design. This evolution reflects broader shifts in consumer values, with an increasing emphasis on authentic experiences, sustainability, wellness, and meaningful connection."),
            ],
            related_articles: strings(&["designing-retail-experiences", "architectural-lighting"]),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "mischief-restaurant".into(),
            slug: "mischief-restaurant".into(),
            title: "MISCHIEF RESTAURANT".into(),
            subtitle: Some("A playful fine dining experience".into()),
            client: Some("Mischief Group".into()),
            year: "2023".into(),
            category: "interior-design".into(),
            location: Some("Paris, France".into()),
            main_image: asset("2730139936.jpeg"),
            gallery: vec![
                gallery("2730139936.jpeg", "Mischief Restaurant Interior"),
                gallery("580234126.jpeg", "Mischief Restaurant Dining Area"),
            ],
            description: "A revolutionary dining concept that blends playful aesthetics with serious culinary craftsmanship. Our design creates unexpected moments of delight throughout the customer journey.".into(),
            challenge: Some("To create a space that embodies the playful spirit of the Mischief brand while maintaining the elegance expected in fine dining.".into()),
            solution: Some("We developed a concept based on contrasts\u{2014}serious craftsmanship with whimsical presentation, traditional techniques with surprising twists. The space features custom furniture and lighting designed to create moments of surprise and delight.".into()),
            team_members: strings(&["Sophie Laurent", "Thomas Renaud"]),
            technologies: strings(&["Custom furniture", "Specialized lighting", "Interactive elements"]),
            featured: true,
            ..Default::default()
        },
        Project {
            id: "audemars-piguet".into(),
            slug: "audemars-piguet".into(),
            title: "Audemars Piguet".into(),
            subtitle: Some("Horological Excellence Exhibition".into()),
            client: Some("Audemars Piguet".into()),
            year: "2023".into(),
            category: "exhibitions".into(),
            location: Some("Geneva, Switzerland".into()),
            main_image: asset("2717469035.jpeg"),
            gallery: vec![gallery("2717469035.jpeg", "Audemars Piguet Exhibition")],
            description: "An immersive exhibition celebrating the heritage and innovation of Swiss luxury watchmaker Audemars Piguet.".into(),
            featured: true,
            ..Default::default()
        },
        Project {
            id: "cartier-ww24".into(),
            slug: "cartier-ww24".into(),
            title: "Cartier WW24".into(),
            subtitle: Some("Watches & Wonders 2024".into()),
            client: Some("Cartier".into()),
            year: "2024".into(),
            category: "event-design".into(),
            location: Some("Geneva, Switzerland".into()),
            main_image: asset("1768823742.jpeg"),
            gallery: vec![gallery("1768823742.jpeg", "Cartier Watches & Wonders Booth")],
            description: "A luxurious pavilion designed for Cartier's presence at Watches & Wonders 2024, blending brand heritage with contemporary design.".into(),
            featured: false,
            ..Default::default()
        },
        Project {
            id: "louis-vuitton-after-show".into(),
            slug: "louis-vuitton-after-show".into(),
            title: "Louis Vuitton After Show".into(),
            subtitle: Some("FW24 Collection Celebration".into()),
            client: Some("Louis Vuitton".into()),
            year: "2023".into(),
            category: "event-design".into(),
            location: Some("Paris, France".into()),
            main_image: asset("2730139936.jpeg"),
            gallery: vec![gallery("2730139936.jpeg", "Louis Vuitton After Show Event")],
            description: "An exclusive after-show celebration following Louis Vuitton's Fall/Winter 2024 runway presentation.".into(),
            featured: false,
            ..Default::default()
        },
        Project {
            id: "serie-9-table-lamp".into(),
            slug: "serie-9-table-lamp".into(),
            title: "Serie 9 Table Lamp".into(),
            subtitle: Some("Sculptural lighting design".into()),
            year: "2022".into(),
            category: "product-design".into(),
            main_image: asset("2717469035.jpeg"),
            gallery: vec![gallery("2717469035.jpeg", "Serie 9 Table Lamp")],
            description: "A minimalist table lamp that explores the relationship between light, material, and form.".into(),
            featured: false,
            ..Default::default()
        },
        Project {
            id: "montblanc".into(),
            slug: "montblanc".into(),
            title: "Montblanc".into(),
            subtitle: Some("Collection Launch Exhibition".into()),
            client: Some("Montblanc".into()),
            year: "2023".into(),
            category: "exhibitions".into(),
            location: Some("Hamburg, Germany".into()),
            main_image: asset("1533142913.jpeg"),
            gallery: vec![gallery("1533142913.jpeg", "Montblanc Exhibition")],
            description: "An exhibition space designed to showcase Montblanc's heritage and craftsmanship through an immersive journey.".into(),
            featured: true,
            ..Default::default()
        },
        Project {
            id: "ferragamo".into(),
            slug: "ferragamo".into(),
            title: "Ferragamo".into(),
            subtitle: Some("Milan Design Week Installation".into()),
            client: Some("Ferragamo".into()),
            year: "2023".into(),
            category: "installation".into(),
            location: Some("Milan, Italy".into()),
            main_image: asset("1087224454.jpeg"),
            gallery: vec![gallery("1087224454.jpeg", "Ferragamo Installation")],
            description: "A striking installation for Milan Design Week that explores the intersection of fashion and design through Ferragamo's lens.".into(),
            featured: false,
            ..Default::default()
        },
        Project {
            id: "hermes-window-display".into(),
            slug: "hermes-window-display".into(),
            title: "Herm\u{e8}s Window Display".into(),
            subtitle: Some("Seasonal window concept".into()),
            client: Some("Herm\u{e8}s".into()),
            year: "2023".into(),
            category: "retail-design".into(),
            location: Some("Global".into()),
            main_image: asset("310819825.jpeg"),
            gallery: vec![gallery("310819825.jpeg", "Herm\u{e8}s Window Display")],
            description: "A globally implemented window display concept for Herm\u{e8}s that celebrates the brand's seasonal theme through sculptural storytelling.".into(),
            featured: true,
            ..Default::default()
        },
        Project {
            id: "dior-pop-up".into(),
            slug: "dior-pop-up".into(),
            title: "Dior Pop-Up".into(),
            subtitle: Some("Resort collection showcase".into()),
            client: Some("Dior".into()),
            year: "2024".into(),
            category: "retail-design".into(),
            location: Some("Miami, USA".into()),
            main_image: asset("2618432853.jpeg"),
            gallery: vec![gallery("2618432853.jpeg", "Dior Pop-Up Store")],
            description: "A temporary retail environment created to showcase Dior's resort collection in a fresh, immersive context.".into(),
            featured: false,
            ..Default::default()
        },
        Project {
            id: "nyt-cooking-dinner".into(),
            slug: "nyt-cooking-dinner".into(),
            title: "NYT Cooking Dinner".into(),
            subtitle: Some("Experiential dining event".into()),
            client: Some("The New York Times".into()),
            year: "2024".into(),
            category: "event-design".into(),
            location: Some("New York, USA".into()),
            main_image: asset("580234126.jpeg"),
            gallery: vec![gallery("580234126.jpeg", "NYT Cooking Dinner Event")],
            description: "An experiential dining event that brings the NYT Cooking platform to life through carefully designed environments and touchpoints.".into(),
            featured: true,
            ..Default::default()
        },
    ]
}
