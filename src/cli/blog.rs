//! Blog commands

use colored::Colorize;

use crate::cli::args::{BlogFilterArgs, GlobalOptions};
use crate::cli::handlers::{not_found, print_detail, run_list_command};
use crate::cli::CommandContext;
use crate::client::ContentApi;
use crate::client::models::BlogPost;
use crate::error::Result;
use crate::models::BlogDisplay;
use crate::output::formatters::{format_opt_date, strip_html};

/// Run the blog list command
pub async fn list(opts: &GlobalOptions, filters: &BlogFilterArgs) -> Result<()> {
    let filter = filters.to_filter();
    run_list_command::<BlogPost, BlogDisplay, _, _>(opts, "blog posts", |loader| async move {
        loader.list_blogs(&filter).await
    })
    .await
}

/// Run the blog get command
pub async fn get(opts: &GlobalOptions, slug: &str) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let post = ctx
        .loader
        .get_blog(slug)
        .await
        .ok_or_else(|| not_found("Blog post", slug))?;

    print_detail::<_, BlogDisplay>(&ctx, post, print_post)
}

fn print_post(post: &BlogPost) {
    println!("{}", post.title.bold());

    let mut byline = vec![];
    if let Some(ref author) = post.author_display_name {
        byline.push(format!("by {}", author));
    }
    if let Some(ref category) = post.category_name {
        byline.push(category.clone());
    }
    byline.push(format_opt_date(
        post.published_date.as_deref().or(post.created_at.as_deref()),
    ));
    println!("{}", byline.join(" · ").dimmed());

    if !post.tags.is_empty() {
        let tags: Vec<_> = post.tags.iter().map(|t| format!("#{}", t.name)).collect();
        println!("{}", tags.join(" ").cyan());
    }
    if let Some(ref image) = post.featured_image_url {
        println!("Image: {}", image);
    }

    println!();
    let body = post.content.as_deref().unwrap_or(&post.excerpt);
    println!("{}", strip_html(body));
}
