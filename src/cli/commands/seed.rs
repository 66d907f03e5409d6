use std::sync::Arc;

use crate::models::blog::{Blog, CreateBlog, Quote};
use crate::models::cause::{Cause, CreateCause};
use crate::models::testimonial::{CreateTestimonial, Testimonial};
use crate::store::{DocumentStore, PgStore, Repository};

/// Load starter content so a fresh deployment has something to show.
/// Collections that already hold documents are left alone.
pub async fn run() -> anyhow::Result<()> {
    let store: Arc<dyn DocumentStore> = Arc::new(PgStore::connect().await?);

    seed_blogs(&store).await?;
    seed_causes(&store).await?;
    seed_testimonials(&store).await?;

    println!("Seed data loaded");
    Ok(())
}

async fn seed_blogs(store: &Arc<dyn DocumentStore>) -> anyhow::Result<()> {
    let repo: Repository<Blog> = Repository::new(Blog::COLLECTION, store.clone());
    if repo.count().await? > 0 {
        println!("blogs already seeded, skipping");
        return Ok(());
    }

    let posts = vec![
        CreateBlog {
            title: "Welcome to the Causebase Blog".to_string(),
            slug: "welcome-to-the-causebase-blog".to_string(),
            excerpt: "Our first post: what this platform is for and the stories we plan to share."
                .to_string(),
            content: "Welcome! We'll be sharing updates about our welfare initiatives, success \
                      stories, and ways you can help. Stay tuned for more."
                .to_string(),
            featured_image: "/images/hero-1.webp".to_string(),
            images: vec![],
            quote: Quote::default(),
        },
        CreateBlog {
            title: "How Your Donations Make a Difference".to_string(),
            slug: "how-donations-make-a-difference".to_string(),
            excerpt: "A look at the direct impact of your contributions through our quarterly \
                      report."
                .to_string(),
            content: "Your donations directly fund food, shelter and medical care. Our latest \
                      quarterly report highlights the lives touched by your generosity."
                .to_string(),
            featured_image: "/images/hero-2.jpg".to_string(),
            images: vec![],
            quote: Quote {
                text: "No one has ever become poor by giving.".to_string(),
                author: "Anne Frank".to_string(),
            },
        },
    ];

    for post in posts {
        let blog = Blog::new(post, "Causebase Team".to_string());
        repo.insert(blog.id, &blog).await?;
    }
    println!("seeded blogs");
    Ok(())
}

async fn seed_causes(store: &Arc<dyn DocumentStore>) -> anyhow::Result<()> {
    let repo: Repository<Cause> = Repository::new(Cause::COLLECTION, store.clone());
    if repo.count().await? > 0 {
        println!("causes already seeded, skipping");
        return Ok(());
    }

    let causes = vec![
        CreateCause {
            title: "Emergency Medical Care".to_string(),
            description: "Emergency treatment and long-term rehabilitation for injured animals."
                .to_string(),
            content: "We work with veterinary experts to provide immediate and long-term \
                      treatment for every animal brought to us."
                .to_string(),
            image: "/images/cause-medical.png".to_string(),
            goal_amount: 50000.0,
            raised_amount: Some(32500.0),
            category: "medical".to_string(),
            featured: true,
        },
        CreateCause {
            title: "Winter Shelter Fund".to_string(),
            description: "Weatherproof shelters to keep rescued animals safe through winter."
                .to_string(),
            content: "Every shelter we build houses a dozen animals through the coldest months. \
                      Your donation covers materials and upkeep."
                .to_string(),
            image: "/images/cause-shelter.jpg".to_string(),
            goal_amount: 80000.0,
            raised_amount: None,
            category: "shelter".to_string(),
            featured: false,
        },
    ];

    for cause in causes {
        let cause = Cause::new(cause);
        repo.insert(cause.id, &cause).await?;
    }
    println!("seeded causes");
    Ok(())
}

async fn seed_testimonials(store: &Arc<dyn DocumentStore>) -> anyhow::Result<()> {
    let repo: Repository<Testimonial> = Repository::new(Testimonial::COLLECTION, store.clone());
    if repo.count().await? > 0 {
        println!("testimonials already seeded, skipping");
        return Ok(());
    }

    let testimonials = vec![
        CreateTestimonial {
            name: "Priya Sharma".to_string(),
            role: "Monthly donor".to_string(),
            content: "Seeing exactly where my donation goes each quarter keeps me giving."
                .to_string(),
            image: "/images/testimonial-1.jpg".to_string(),
            rating: 5,
        },
        CreateTestimonial {
            name: "Rahul Verma".to_string(),
            role: "Volunteer".to_string(),
            content: "The team genuinely cares. Every weekend at the shelter is time well spent."
                .to_string(),
            image: "/images/testimonial-2.jpg".to_string(),
            rating: 5,
        },
    ];

    for testimonial in testimonials {
        let testimonial = Testimonial::new(testimonial);
        repo.insert(testimonial.id, &testimonial).await?;
    }
    println!("seeded testimonials");
    Ok(())
}
