//! # 서비스 레지스트리
//!
//! 애플리케이션 전역에서 공유되는 싱글톤 컴포넌트(리포지토리, 서비스, 외부 클라이언트)를
//! 타입 기준으로 보관하는 레지스트리입니다.
//!
//! MongoDB 리포지토리는 `#[repository]` 매크로로 선언되어 `inventory`에 자동 등록되고,
//! 처음 요청될 때 의존성(`Database`, 다른 리포지토리)을 주입받아 생성됩니다.
//! 서비스는 트레이트 객체를 주입받아야 하므로 `main`에서 직접 조립해 [`ServiceLocator::set`]으로 등록합니다.
//!
//! ## 동작 방식
//!
//! 1. **자동 등록**: `#[repository]` 매크로가 [`RepositoryRegistration`]을 제출
//! 2. **지연 생성**: 등록되지 않은 `*Repository` 타입은 첫 조회 시 생성자를 호출해 보관
//! 3. **타입 키**: `TypeId`를 키로 각 타입당 하나의 인스턴스만 보관
//! 4. **동시성 안전성**: `RwLock`으로 읽기 다수 / 쓰기 소수 패턴 보호
//!
//! ```rust,ignore
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all()?;
//!
//! let like_repo = ServiceLocator::get::<LikeMongoRepository>();
//! let service = ServiceLocator::try_get::<HospitalService>()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use log::{debug, info};
use once_cell::sync::Lazy;
use crate::core::errors::{AppError, AppResult};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름을 반환합니다.
    fn name(&self) -> &str;
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
///
/// `#[repository]` 매크로가 구현을 생성합니다.
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름을 반환합니다. (예: `hospital_mongo_repository`)
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션의 이름을 반환합니다.
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 로직을 수행합니다.
    async fn init(&self) -> Result<(), Box<dyn std::error::Error>>;
}

/// `#[repository]` 매크로가 `inventory`에 제출하는 생성자 정보
pub struct RepositoryRegistration {
    /// `{name}_repository` 형식의 등록 이름
    pub name: &'static str,
    /// `Box<Arc<T>>`를 돌려주는 생성자
    pub constructor: fn() -> Box<dyn Any + Send + Sync>,
}

inventory::collect!(RepositoryRegistration);

/// 싱글톤 컴포넌트 저장소
pub struct ServiceLocator {
    /// `TypeId`를 키로 각 타입당 하나의 인스턴스를 저장
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_id = TypeId::of::<T>();
        debug!("📦 Registering: {}", Self::extract_clean_type_name(std::any::type_name::<T>()));

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(type_id, instance as Arc<dyn Any + Send + Sync>);
    }

    /// 싱글톤 인스턴스를 가져오며, 없으면 `#[repository]` 등록 정보로 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 등록되지 않았고 생성할 수도 없는 경우
    pub fn try_get<T: 'static + Send + Sync>() -> AppResult<Arc<T>> {
        let type_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        if let Some(instance) = Self::lookup::<T>() {
            return Ok(instance);
        }

        let registration = type_name
            .strip_suffix("Repository")
            .map(str::to_lowercase)
            .and_then(|key| {
                inventory::iter::<RepositoryRegistration>()
                    .find(|registration| registration_key(registration.name) == key)
            })
            .ok_or_else(|| AppError::InternalError(format!("Component not registered: {}", type_name)))?;

        // 생성자가 자신의 의존성을 조회하므로 잠금 없이 호출합니다
        let instance = (registration.constructor)()
            .downcast::<Arc<T>>()
            .map(|boxed| *boxed)
            .map_err(|_| AppError::InternalError(format!("Type mismatch for repository: {}", registration.name)))?;

        debug!("🔧 Created on demand: {} ({})", type_name, registration.name);
        Self::set(instance.clone());
        Ok(instance)
    }

    /// 싱글톤 인스턴스를 가져옵니다. `#[repository]` 필드 주입에서 사용됩니다.
    ///
    /// # Panics
    ///
    /// 시작 시점의 배선 오류이므로, 인스턴스를 찾거나 만들 수 없으면 패닉합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        Self::try_get::<T>().unwrap_or_else(|e| panic!("{}", e))
    }

    /// `inventory`에 제출된 모든 리포지토리를 생성합니다.
    ///
    /// 먼저 `Database`가 [`ServiceLocator::set`]으로 등록되어 있어야 합니다.
    pub fn initialize_all() -> AppResult<()> {
        let registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        info!("🔄 리포지토리 {}개 생성 중...", registrations.len());

        for registration in registrations {
            let _instance = (registration.constructor)();
            debug!("   ├─ {}: ✓ Created", registration.name);
        }
        Ok(())
    }

    fn lookup<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}

/// `like_mongo_repository` → `likemongo` (`LikeMongoRepository`의 접두사와 비교)
fn registration_key(name: &str) -> String {
    name.strip_suffix("_repository")
        .unwrap_or(name)
        .replace('_', "")
        .to_lowercase()
}
