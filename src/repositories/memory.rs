//! 테스트용 인메모리 리포지토리
//!
//! MongoDB 구현과 같은 필터/정렬/페이지/유니크 규칙을 따르며,
//! `fail_*` 스위치로 업스트림 장애를 흉내 낼 수 있습니다.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{hospitals::Hospital, likes::Like, users::User};
use crate::domain::models::Page;
use crate::repositories::{
    hospitals::HospitalRepository,
    likes::LikeRepository,
    reviews::ReviewRepository,
    users::UserRepository,
};

fn unavailable() -> AppError {
    AppError::DatabaseError("connection refused".to_string())
}

#[derive(Default)]
pub struct InMemoryLikeRepository {
    likes: Mutex<HashSet<Like>>,
}

impl InMemoryLikeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.likes.lock().unwrap().len()
    }
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepository {
    async fn exists(&self, user_id: &str, hospital_id: &str) -> AppResult<bool> {
        Ok(self.likes.lock().unwrap().contains(&Like::new(user_id, hospital_id)))
    }

    async fn save(&self, like: &Like) -> AppResult<()> {
        if !self.likes.lock().unwrap().insert(like.clone()) {
            return Err(AppError::ConflictError("이미 좋아요한 병원입니다".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, user_id: &str, hospital_id: &str) -> AppResult<bool> {
        Ok(self.likes.lock().unwrap().remove(&Like::new(user_id, hospital_id)))
    }

    async fn count_by_hospital(&self, hospital_id: &str) -> AppResult<u64> {
        let likes = self.likes.lock().unwrap();
        Ok(likes.iter().filter(|like| like.hospital_id == hospital_id).count() as u64)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Like>> {
        let likes = self.likes.lock().unwrap();
        let mut found: Vec<Like> = likes.iter().filter(|like| like.user_id == user_id).cloned().collect();
        found.sort_by(|a, b| a.hospital_id.cmp(&b.hospital_id));
        Ok(found)
    }
}

pub struct InMemoryHospitalRepository {
    hospitals: Mutex<Vec<Hospital>>,
    like_repo: Arc<dyn LikeRepository>,
    fail_reads: AtomicBool,
}

impl InMemoryHospitalRepository {
    pub fn new(hospitals: Vec<Hospital>, like_repo: Arc<dyn LikeRepository>) -> Self {
        Self {
            hospitals: Mutex::new(hospitals),
            like_repo,
            fail_reads: AtomicBool::new(false),
        }
    }

    pub fn remove(&self, hpid: &str) {
        self.hospitals.lock().unwrap().retain(|hospital| hospital.hpid != hpid);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check(&self) -> AppResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(())
    }

    fn page_of<F>(&self, predicate: F, page: Page) -> Vec<Hospital>
    where
        F: Fn(&Hospital) -> bool,
    {
        let mut matched: Vec<Hospital> = self.hospitals
            .lock()
            .unwrap()
            .iter()
            .filter(|hospital| predicate(hospital))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.duty_name.cmp(&b.duty_name));
        matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .collect()
    }
}

#[async_trait]
impl HospitalRepository for InMemoryHospitalRepository {
    async fn list_all_ids(&self) -> AppResult<Vec<String>> {
        self.check()?;
        Ok(self.hospitals.lock().unwrap().iter().map(|h| h.hpid.clone()).collect())
    }

    async fn find_by_type_and_address(
        &self,
        type_label: &str,
        address1: &str,
        address2: &str,
        page: Page,
    ) -> AppResult<Vec<Hospital>> {
        self.check()?;
        Ok(self.page_of(
            |h| h.has_type(type_label) && h.address1 == address1 && h.address2 == address2,
            page,
        ))
    }

    async fn find_by_address(&self, address1: &str, address2: &str, page: Page) -> AppResult<Vec<Hospital>> {
        self.check()?;
        Ok(self.page_of(|h| h.address1 == address1 && h.address2 == address2, page))
    }

    async fn find_detail(&self, hospital_id: &str) -> AppResult<Option<Hospital>> {
        self.check()?;
        Ok(self.hospitals.lock().unwrap().iter().find(|h| h.hpid == hospital_id).cloned())
    }

    async fn find_liked_by_user(&self, user_id: &str) -> AppResult<Vec<Hospital>> {
        let mut hospitals = Vec::new();
        for like in self.like_repo.find_by_user(user_id).await? {
            if let Some(hospital) = self.find_detail(&like.hospital_id).await? {
                hospitals.push(hospital);
            }
        }
        Ok(hospitals)
    }
}

#[derive(Default)]
pub struct InMemoryReviewRepository {
    ratings: Mutex<HashMap<String, Vec<i32>>>,
    fail: AtomicBool,
}

impl InMemoryReviewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rating(&self, hospital_id: &str, rating: i32) {
        self.ratings
            .lock()
            .unwrap()
            .entry(hospital_id.to_string())
            .or_default()
            .push(rating);
    }

    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn average_rating(&self, hospital_id: &str) -> AppResult<f64> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        let ratings = self.ratings.lock().unwrap();
        Ok(match ratings.get(hospital_id) {
            Some(values) if !values.is_empty() => {
                values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64
            }
            _ => 0.0,
        })
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(user_id).cloned())
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.user_id()) {
            return Err(AppError::ConflictError("이미 등록된 사용자입니다".to_string()));
        }
        users.insert(user.user_id().to_string(), user.clone());
        Ok(())
    }
}

/// 테스트용 병원 문서
pub fn hospital(hpid: &str, name: &str, address2: &str, types: &[&str]) -> Hospital {
    Hospital {
        hpid: hpid.to_string(),
        duty_name: name.to_string(),
        duty_tel1: "02-000-0000".to_string(),
        duty_addr: format!("서울특별시 {} {}", address2, name),
        duty_mapimg: format!("{} 정문 앞", name),
        wgs84_lat: 37.5,
        wgs84_lon: 126.9,
        duty_time1s: "0900".to_string(),
        duty_time1c: "1800".to_string(),
        duty_time2s: "0900".to_string(),
        duty_time2c: "1800".to_string(),
        duty_time3s: "0900".to_string(),
        duty_time3c: "1800".to_string(),
        duty_time4s: "0900".to_string(),
        duty_time4c: "1800".to_string(),
        duty_time5s: "0900".to_string(),
        duty_time5c: "1800".to_string(),
        duty_time6s: "0900".to_string(),
        duty_time6c: "1300".to_string(),
        duty_type: types.iter().map(|t| t.to_string()).collect(),
        address1: "서울특별시".to_string(),
        address2: address2.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_like_repository_enforces_uniqueness() {
        let repo = InMemoryLikeRepository::new();
        let like = Like::new("u1", "H1");

        repo.save(&like).await.unwrap();
        assert!(matches!(repo.save(&like).await, Err(AppError::ConflictError(_))));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.count_by_hospital("H1").await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_hospital_page_is_sorted_by_name() {
        let likes = Arc::new(InMemoryLikeRepository::new());
        let repo = InMemoryHospitalRepository::new(
            vec![
                hospital("H2", "나병원", "동작구", &["내과"]),
                hospital("H1", "가병원", "동작구", &["내과"]),
                hospital("H3", "다병원", "관악구", &["내과"]),
            ],
            likes,
        );

        let page = repo.find_by_address("서울특별시", "동작구", Page::new(1, 10).unwrap()).await.unwrap();
        let names: Vec<_> = page.iter().map(|h| h.duty_name.as_str()).collect();
        assert_eq!(names, vec!["가병원", "나병원"]);
    }
}
