//! Startup data: the bootstrap admin and the optional demo catalog.

use entity::{game::Genre, user::Role};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::AdminBootstrap,
    data::{game::GameRepository, user::UserRepository},
    error::AppError,
    model::{
        game::{CreateGameParam, DEFAULT_IMAGE, DEFAULT_STOCK},
        user::{normalize_email, CreateUserParam, User},
    },
    util::password::hash_password,
};

struct DemoUser {
    name: &'static str,
    email: &'static str,
    password: &'static str,
    role: Role,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        name: "Admin User",
        email: "admin@gamestore.com",
        password: "admin123",
        role: Role::Admin,
    },
    DemoUser {
        name: "John Doe",
        email: "john@example.com",
        password: "123456",
        role: Role::User,
    },
    DemoUser {
        name: "Jane Smith",
        email: "jane@example.com",
        password: "123456",
        role: Role::User,
    },
];

/// (title, description, price, genre, rating)
const DEMO_GAMES: &[(&str, &str, f64, Genre, f64)] = &[
    (
        "Elden Ring",
        "Explore the Lands Between in a vast open-world action RPG.",
        59.99,
        Genre::Rpg,
        4.8,
    ),
    (
        "Hollow Knight",
        "Descend into a ruined insect kingdom in this hand-drawn metroidvania.",
        14.99,
        Genre::Platformer,
        4.7,
    ),
    (
        "Forza Horizon 5",
        "Race across a sprawling open world set in Mexico.",
        49.99,
        Genre::Racing,
        4.6,
    ),
    (
        "Civilization VI",
        "Build an empire to stand the test of time in turn-based strategy.",
        29.99,
        Genre::Strategy,
        4.5,
    ),
    (
        "Resident Evil 4",
        "Survive a rural village overrun by a sinister cult.",
        39.99,
        Genre::Horror,
        4.7,
    ),
    (
        "Portal 2",
        "Solve physics puzzles with a portal gun and a sarcastic AI.",
        9.99,
        Genre::Puzzle,
        4.9,
    ),
    (
        "Street Fighter 6",
        "Compete in the latest entry of the classic fighting series.",
        44.99,
        Genre::Fighting,
        4.4,
    ),
    (
        "DOOM Eternal",
        "Rip and tear through hordes of demons in a fast-paced shooter.",
        34.99,
        Genre::Shooter,
        4.6,
    ),
];

/// Creates the configured admin when the store has no admin yet.
///
/// Does nothing when no bootstrap credentials are configured or an admin already exists.
/// An existing non-admin account with the bootstrap email is left untouched.
pub async fn ensure_admin(
    db: &DatabaseConnection,
    bootstrap: Option<&AdminBootstrap>,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        tracing::info!("Admin account present");
        return Ok(());
    }

    let Some(bootstrap) = bootstrap else {
        tracing::warn!("No admin account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one");
        return Ok(());
    };

    let email = normalize_email(&bootstrap.email)?;
    if user_repo.find_by_email(&email).await?.is_some() {
        tracing::warn!(
            "Bootstrap admin email {} belongs to an existing non-admin account",
            email
        );
        return Ok(());
    }

    let admin = user_repo
        .create(CreateUserParam {
            name: bootstrap.name.clone(),
            email,
            password_hash: hash_password(&bootstrap.password)?,
            role: Role::Admin,
        })
        .await?;

    tracing::info!("Created admin account {} ({})", admin.id, admin.email);

    Ok(())
}

/// Inserts demo users and a demo catalog when the catalog is empty.
///
/// Demo users whose email is already registered are reused rather than recreated. Games are
/// owned by the demo admin, or by the first admin found if that email belongs to a regular
/// account.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), AppError> {
    let game_repo = GameRepository::new(db);

    if game_repo.count().await? > 0 {
        tracing::info!("Catalog already populated, skipping seed");
        return Ok(());
    }

    let mut owner: Option<User> = None;
    for demo in DEMO_USERS {
        let user = find_or_create_user(db, demo).await?;
        if owner.is_none() && user.is_admin() {
            owner = Some(user);
        }
    }

    let Some(owner) = owner else {
        tracing::warn!("No admin available to own demo games, skipping catalog seed");
        return Ok(());
    };

    for (title, description, price, genre, rating) in DEMO_GAMES {
        game_repo
            .create(CreateGameParam {
                title: title.to_string(),
                description: description.to_string(),
                price: *price,
                genre: *genre,
                image: DEFAULT_IMAGE.to_string(),
                download_url: String::new(),
                created_by: owner.id,
                stock: DEFAULT_STOCK,
                rating: *rating,
            })
            .await?;
    }

    tracing::info!(
        "Seeded {} demo users and {} games",
        DEMO_USERS.len(),
        DEMO_GAMES.len()
    );

    Ok(())
}

async fn find_or_create_user(db: &DatabaseConnection, demo: &DemoUser) -> Result<User, AppError> {
    let user_repo = UserRepository::new(db);

    if let Some(user) = user_repo.find_by_email(demo.email).await? {
        return Ok(user);
    }

    Ok(user_repo
        .create(CreateUserParam {
            name: demo.name.to_string(),
            email: demo.email.to_string(),
            password_hash: hash_password(demo.password)?,
            role: demo.role,
        })
        .await?)
}
