//! Command-line consumer of the storefront.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::{display_image, Category, Product, ProductDraft, ProductQuery};
use crate::slices::cart::CartState;
use crate::store::Phase;
use crate::storefront::Storefront;

#[derive(Debug, Parser)]
#[command(name = "trendy-store", version, about = "Headless client for The Trendy Store")]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the catalogue
    Products,
    /// Show the featured products from the landing page
    Featured,
    /// Show one product
    Product { id: String },
    /// Search products by text, price range and category
    Search(SearchArgs),
    /// List categories
    Categories,
    /// Show one category and the products in it
    Category { id: String },
    /// Log in with email and password
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in with the demo guest account
    Guest,
    /// Forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Create a product (admin)
    Create(DraftArgs),
    /// Replace a product's fields (admin)
    Update {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete a product (admin)
    Delete { id: String },
    /// Put products in a cart and show the total
    Cart {
        /// Product ids; repeat an id to add more than one unit
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to search for
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long, default_value = "0")]
    pub min_price: Decimal,
    #[arg(long, default_value = "10000")]
    pub max_price: Decimal,
    /// 1-based page number
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,
    /// Restrict to a category id
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Debug, Args)]
pub struct DraftArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub price: Decimal,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Category id
    #[arg(long)]
    pub category: String,
    #[arg(long, default_value = "")]
    pub image: String,
}

impl From<DraftArgs> for ProductDraft {
    fn from(args: DraftArgs) -> Self {
        Self {
            title: args.title,
            price: args.price,
            description: args.description,
            category_id: args.category,
            image: args.image,
        }
    }
}

impl SearchArgs {
    pub fn to_query(&self, page_size: u32) -> anyhow::Result<ProductQuery> {
        let offset = self
            .page
            .saturating_sub(1)
            .checked_mul(page_size)
            .ok_or_else(|| anyhow!("page {} is out of range", self.page))?;
        Ok(ProductQuery {
            search_query: self.query.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            offset,
            limit: page_size,
            category_id: self.category.clone(),
        })
    }
}

fn settle<P>(phase: Phase<P>) -> anyhow::Result<P> {
    match phase {
        Phase::Fulfilled(payload) => Ok(payload),
        Phase::Rejected(message) => bail!(message),
        Phase::Idle | Phase::Pending => bail!("operation did not complete"),
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    let storefront = Storefront::from_config(config)?;
    if let Some(Phase::Rejected(message)) = storefront.restore_session().await {
        tracing::warn!(error = %message, "Stored session could not be restored");
    }

    let page_size = storefront.config().storefront.page_size;

    match cli.command {
        Command::Products => {
            let page = settle(storefront.fetch_products().await)?;
            print!("{}", format_listing(&page.items, page.total_count));
        }
        Command::Featured => {
            settle(storefront.fetch_products().await)?;
            print!("{}", format_listing(&storefront.featured_products(), 0));
        }
        Command::Product { id } => {
            let product = settle(storefront.fetch_single_product(&id).await)?;
            print!("{}", format_product_detail(&product));
        }
        Command::Search(args) => {
            let page = settle(storefront.search_products(args.to_query(page_size)?).await)?;
            print!("{}", format_listing(&page.items, page.total_count));
            let pages = storefront.store().select(|s| s.products.page_count(page_size));
            println!("page {} of {}", args.page, pages.max(1));
        }
        Command::Categories => {
            let categories = settle(storefront.fetch_categories().await)?;
            print!("{}", format_categories(&categories));
        }
        Command::Category { id } => {
            let category = settle(storefront.fetch_single_category(&id).await)?;
            println!("{} ({})", category.name, display_image(&category.image));
            let query = ProductQuery {
                limit: page_size,
                ..ProductQuery::default()
            }
            .in_category(category.id);
            let page = settle(storefront.search_products(query).await)?;
            print!("{}", format_listing(&page.items, page.total_count));
        }
        Command::Login { email, password } => {
            let credential = crate::domain::UserCredential { email, password };
            let response = settle(storefront.login(credential).await)?;
            println!("Logged in as {}", response.user.email);
        }
        Command::Guest => {
            let response = settle(storefront.login_as_guest().await?)?;
            println!("Logged in as {}", response.user.email);
        }
        Command::Logout => {
            storefront.logout();
            println!("Logged out");
        }
        Command::Whoami => match storefront.current_user() {
            Some(user) => println!("{} ({:?})", user.email, user.role),
            None => println!("Not logged in"),
        },
        Command::Create(draft) => {
            require_admin(&storefront, "create")?;
            let product = settle(storefront.create_product(draft.into()).await)?;
            println!("Created {}", product.id);
        }
        Command::Update { id, draft } => {
            require_admin(&storefront, "update")?;
            let product = settle(storefront.update_product(&id, draft.into()).await)?;
            println!("Updated {}", product.id);
        }
        Command::Delete { id } => {
            require_admin(&storefront, "delete")?;
            let deleted = settle(storefront.delete_product(&id).await)?;
            println!("Deleted {}", deleted.id);
        }
        Command::Cart { ids } => {
            for id in ids {
                let product = settle(storefront.fetch_single_product(&id).await)?;
                storefront.add_to_cart_now(product);
            }
            let cart = storefront.store().select(|s| s.cart.clone());
            print!("{}", format_cart(&cart));
        }
    }

    Ok(())
}

fn require_admin(storefront: &Storefront, operation: &str) -> anyhow::Result<()> {
    if !storefront.is_admin() {
        bail!("'{}' requires an admin account", operation);
    }
    Ok(())
}

pub fn format_listing(products: &[Product], total: u64) -> String {
    let mut out: String = products
        .iter()
        .map(|p| format!("{:<26} €{:<10} {}\n", p.id, p.price, p.title))
        .collect();
    if total > 0 {
        out.push_str(&format!("{} of {} products\n", products.len(), total));
    }
    out
}

pub fn format_product_detail(product: &Product) -> String {
    format!(
        "Product ID: {}\n\
         Product:    {}\n\
         Price:      €{}\n\
         Category:   {}\n\
         In stock:   {}\n\
         Image:      {}\n\
         Description:\n\
         {}\n",
        product.id,
        product.title,
        product.price,
        product.category.name,
        product.quantity,
        display_image(&product.image),
        product.description,
    )
}

pub fn format_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{:<26} {}\n", c.id, c.name))
        .collect()
}

pub fn format_cart(cart: &CartState) -> String {
    if cart.is_empty() {
        return "Cart is empty\n".to_string();
    }
    let mut out: String = cart
        .items
        .iter()
        .map(|line| {
            format!(
                "{:>3} × {:<30} €{}\n",
                line.quantity,
                line.product.title,
                line.subtotal()
            )
        })
        .collect();
    out.push_str(&format!(
        "{} items, total €{}\n",
        cart.item_count(),
        cart.total()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CartItem, CategorySummary};
    use clap::CommandFactory;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: id.into(),
            title: format!("Product {}", id),
            price: Decimal::from(price),
            description: "Nice".into(),
            image: "Image".into(),
            category: CategorySummary {
                id: "c".into(),
                name: "Clothes".into(),
                image: String::new(),
            },
            quantity: 3,
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_args_map_page_to_offset() {
        let cli = Cli::parse_from([
            "trendy-store",
            "search",
            "--query",
            "shirt",
            "--page",
            "3",
            "--category",
            "c1",
        ]);
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        let query = args.to_query(10).unwrap();
        assert_eq!(query.offset, 20);
        assert_eq!(query.limit, 10);
        assert_eq!(query.search_query, "shirt");
        assert_eq!(query.category_id.as_deref(), Some("c1"));
        assert_eq!(query.max_price, Decimal::from(10_000));
    }

    #[test]
    fn huge_page_is_an_error_not_an_overflow() {
        let cli = Cli::parse_from(["trendy-store", "search", "--page", "500000000"]);
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        let err = args.to_query(10).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let last = Cli::parse_from(["trendy-store", "search", "--page", "4294967295"]);
        let Command::Search(args) = last.command else {
            panic!("expected search");
        };
        assert_eq!(args.to_query(1).unwrap().offset, u32::MAX - 1);
    }

    #[test]
    fn page_zero_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["trendy-store", "search", "--page", "0"]).is_err());
    }

    #[test]
    fn create_args_become_draft() {
        let cli = Cli::parse_from([
            "trendy-store",
            "create",
            "--title",
            "Hat",
            "--price",
            "12.50",
            "--category",
            "c1",
        ]);
        let Command::Create(args) = cli.command else {
            panic!("expected create");
        };
        let draft = ProductDraft::from(args);
        assert_eq!(draft.price, Decimal::new(1250, 2));
        assert_eq!(draft.category_id, "c1");
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn settle_maps_rejected_to_error() {
        let err = settle::<()>(Phase::Rejected("Product not found".into())).unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
        assert_eq!(settle(Phase::Fulfilled(5)).unwrap(), 5);
    }

    #[test]
    fn detail_falls_back_to_default_image() {
        let text = format_product_detail(&product("5", 50));
        assert!(text.contains("Product ID: 5"));
        assert!(text.contains("Category:   Clothes"));
        assert!(text.contains("default_image.jpg"));
    }

    #[test]
    fn cart_summary() {
        let cart = CartState {
            items: vec![CartItem {
                product: product("1", 10),
                quantity: 2,
            }],
        };
        let text = format_cart(&cart);
        assert!(text.contains("2 items, total €20"));
        assert_eq!(format_cart(&CartState::default()), "Cart is empty\n");
    }

    #[test]
    fn listing_reports_total() {
        let text = format_listing(&[product("1", 10)], 12);
        assert!(text.contains("1 of 12 products"));
        assert!(!format_listing(&[], 0).contains("of"));
    }
}
