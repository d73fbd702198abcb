//! socdoc 병원 조회 서비스 메인 애플리케이션
//!
//! MongoDB 연결과 카카오 로컬 클라이언트를 준비하고, 리포지토리와 서비스를
//! `ServiceLocator`에 등록한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use socdoc_backend::clients::kakao::KakaoLocalClient;
use socdoc_backend::config::{Environment, RateLimitConfig, ServerConfig};
use socdoc_backend::core::errors::{AppError, AppResult};
use socdoc_backend::core::registry::ServiceLocator;
use socdoc_backend::db::Database;
use socdoc_backend::repositories::{
    hospitals::HospitalMongoRepository,
    likes::LikeMongoRepository,
    reviews::ReviewMongoRepository,
    users::UserMongoRepository,
};
use socdoc_backend::routes::configure_all_routes;
use socdoc_backend::services::{hospitals::HospitalService, users::UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 socdoc 병원 조회 서비스 시작중... ({:?})", Environment::current());

    if let Err(e) = initialize_services().await {
        error!("서비스 초기화 실패: {}", e);
        return Err(io::Error::other(e.to_string()));
    }

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server().await
}

/// 데이터 스토어와 외부 클라이언트를 연결하고 서비스를 등록합니다
///
/// `#[repository]` 리포지토리는 등록된 `Database`를 주입받아 생성되고,
/// 서비스는 트레이트 객체로 리포지토리를 받아 여기서 직접 조립됩니다.
/// 좋아요 유니크 인덱스가 여기서 생성됩니다.
async fn initialize_services() -> AppResult<()> {
    info!("📡 데이터베이스 연결 중...");
    let database = Database::new().await?;
    ServiceLocator::set(Arc::new(database));

    ServiceLocator::initialize_all()?;

    let like_repo = ServiceLocator::try_get::<LikeMongoRepository>()?;
    let hospital_repo = ServiceLocator::try_get::<HospitalMongoRepository>()?;
    let review_repo = ServiceLocator::try_get::<ReviewMongoRepository>()?;
    let user_repo = ServiceLocator::try_get::<UserMongoRepository>()?;

    hospital_repo.create_indexes().await?;
    like_repo.create_indexes().await?;
    review_repo.create_indexes().await?;
    user_repo.create_indexes().await?;

    let places = Arc::new(KakaoLocalClient::from_env()?);

    ServiceLocator::set(Arc::new(HospitalService::new(
        hospital_repo,
        like_repo,
        review_repo,
        places,
    )));
    ServiceLocator::set(Arc::new(UserService::new(user_repo)));

    Ok(())
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 잘못된 Rate Limiting 설정 또는 서버 실행 오류
async fn start_http_server() -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1/hospitals", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::other(AppError::InternalError(format!(
                "잘못된 Rate Limiting 설정: {:?}",
                rate_limit_config
            )))
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 stderr로 남깁니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ".env.prod"),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ".env.dev"),
        _ => dotenv().map(|_| ".env"),
    };

    if let Err(e) = loaded {
        eprintln!("[{}] 환경 파일 로드 실패: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=socdoc_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 개발 환경의 프론트엔드(localhost:3000)와 자체 서버 주소를 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
