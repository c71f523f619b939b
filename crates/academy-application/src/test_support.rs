//! In-memory fakes of the remote API traits for use case tests.

use academy_core::auth::{AuthApi, AuthScope, CredentialStore, LoginRequest, LoginResponse};
use academy_core::cart::{CartApi, CartLine, CourseId, CourseSummary, Price};
use academy_core::course::{CourseContent, Lesson, LessonApi, LessonId, LessonItem};
use academy_core::error::{AcademyError, Result};
use academy_core::library::{Enrollment, FavoriteCourse, FavoritesApi, HistoryEntry, LibraryApi};
use academy_core::messaging::{
    ConversationId, ConversationSummary, Message, MessagePage, MessagingApi, OutgoingMessage,
    UserId,
};
use academy_core::order::{OrderApi, OrderReceipt, PaymentMethod};
use academy_infrastructure::{MemoryStorage, StoredCredentials};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

pub(crate) fn line(id: u64, course_id: CourseId) -> CartLine {
    CartLine {
        id,
        course_id,
        course: Some(CourseSummary {
            id: course_id,
            name: format!("Course {}", course_id),
            description: None,
            price: Some(Price::Number(10.0)),
        }),
    }
}

pub(crate) fn credentials(user_token: Option<&str>) -> Arc<StoredCredentials> {
    let credentials = StoredCredentials::new(Arc::new(MemoryStorage::new()));
    if let Some(token) = user_token {
        credentials.set_token(AuthScope::EndUser, token).unwrap();
    }
    Arc::new(credentials)
}

/// Server-side cart kept in memory.
///
/// `fetch_cart` captures the lines when called. A queued gate holds the
/// response back until released, which lets tests reorder responses.
#[derive(Default)]
pub(crate) struct FakeCartServer {
    lines: Mutex<Vec<CartLine>>,
    gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    fetch_calls: AtomicUsize,
    remove_calls: AtomicUsize,
    add_calls: AtomicUsize,
    fail_fetch: AtomicBool,
    fail_remove: AtomicBool,
}

impl FakeCartServer {
    pub(crate) fn with_lines(lines: Vec<CartLine>) -> Arc<Self> {
        let server = Self::default();
        *server.lines.lock().unwrap() = lines;
        Arc::new(server)
    }

    pub(crate) fn set_lines(&self, lines: Vec<CartLine>) {
        *self.lines.lock().unwrap() = lines;
    }

    pub(crate) fn lines(&self) -> Vec<CartLine> {
        self.lines.lock().unwrap().clone()
    }

    /// Holds back the next fetch response until the returned sender fires.
    pub(crate) fn hold_next_fetch(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub(crate) fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_remove(&self, fail: bool) {
        self.fail_remove.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn remove_calls(&self) -> usize {
        self.remove_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CartApi for FakeCartServer {
    async fn fetch_cart(&self) -> Result<Vec<CartLine>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let captured = if self.fail_fetch.load(Ordering::SeqCst) {
            Err(AcademyError::transport("connection refused"))
        } else {
            Ok(self.lines())
        };

        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        captured
    }

    async fn remove_from_cart(&self, course_id: CourseId) -> Result<()> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_remove.load(Ordering::SeqCst) {
            return Err(AcademyError::http(500, "Server Error"));
        }
        self.lines
            .lock()
            .unwrap()
            .retain(|line| line.course_id != course_id);
        Ok(())
    }

    async fn add_to_cart(&self, course_id: CourseId) -> Result<()> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        let mut lines = self.lines.lock().unwrap();
        if lines.iter().any(|line| line.course_id == course_id) {
            return Err(AcademyError::http(422, "Course already in cart"));
        }
        let next_id = lines.iter().map(|line| line.id).max().unwrap_or(0) + 1;
        lines.push(line(next_id, course_id));
        Ok(())
    }
}

/// Order endpoint that empties the fake cart on success.
pub(crate) struct FakeOrderApi {
    pub(crate) cart: Arc<FakeCartServer>,
    pub(crate) placed: Mutex<Vec<PaymentMethod>>,
    pub(crate) fail: AtomicBool,
}

impl FakeOrderApi {
    pub(crate) fn new(cart: Arc<FakeCartServer>) -> Arc<Self> {
        Arc::new(Self {
            cart,
            placed: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        })
    }
}

#[async_trait::async_trait]
impl OrderApi for FakeOrderApi {
    async fn place_order(&self, payment_method: PaymentMethod) -> Result<OrderReceipt> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AcademyError::http(500, "Payment declined"));
        }
        self.placed.lock().unwrap().push(payment_method);
        self.cart.set_lines(Vec::new());
        Ok(OrderReceipt(json!({"message": "Order placed successfully"})))
    }
}

/// Auth endpoint answering with a fixed login body.
pub(crate) struct FakeAuthApi {
    pub(crate) login_body: Value,
    pub(crate) admin_body: Value,
    pub(crate) logout_calls: AtomicUsize,
    pub(crate) fail_logout: AtomicBool,
}

impl FakeAuthApi {
    pub(crate) fn new(login_body: Value, admin_body: Value) -> Arc<Self> {
        Arc::new(Self {
            login_body,
            admin_body,
            logout_calls: AtomicUsize::new(0),
            fail_logout: AtomicBool::new(false),
        })
    }
}

#[async_trait::async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        if request.password != "secret" {
            return Err(AcademyError::unauthenticated("Invalid credentials"));
        }
        Ok(LoginResponse(self.login_body.clone()))
    }

    async fn login_admin(&self, request: &LoginRequest) -> Result<LoginResponse> {
        if request.password != "secret" {
            return Err(AcademyError::unauthenticated("Invalid credentials"));
        }
        Ok(LoginResponse(self.admin_body.clone()))
    }

    async fn register(&self, payload: &Value) -> Result<Value> {
        Ok(json!({"message": "Registered", "user": payload.clone()}))
    }

    async fn logout(&self) -> Result<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout.load(Ordering::SeqCst) {
            return Err(AcademyError::transport("connection reset"));
        }
        Ok(())
    }
}

/// Course content with `lesson_ids` in order; started lessons get one video.
pub(crate) struct FakeLessonApi {
    pub(crate) course: CourseContent,
    pub(crate) started: Mutex<Vec<LessonId>>,
}

impl FakeLessonApi {
    pub(crate) fn new(course_id: CourseId, lesson_ids: &[LessonId]) -> Arc<Self> {
        let lessons = lesson_ids
            .iter()
            .map(|id| Lesson {
                id: *id,
                name: format!("Lesson {}", id),
                items: Vec::new(),
            })
            .collect();
        Arc::new(Self {
            course: CourseContent {
                id: course_id,
                name: "Async Rust".to_string(),
                description: None,
                lessons,
            },
            started: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn started(&self) -> Vec<LessonId> {
        self.started.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LessonApi for FakeLessonApi {
    async fn course_content(&self, course_id: CourseId) -> Result<CourseContent> {
        if course_id != self.course.id {
            return Err(AcademyError::http(404, "Course not purchased"));
        }
        Ok(self.course.clone())
    }

    async fn start_lesson(&self, lesson_id: LessonId) -> Result<Lesson> {
        let mut lesson = self
            .course
            .lessons
            .iter()
            .find(|lesson| lesson.id == lesson_id)
            .cloned()
            .ok_or_else(|| AcademyError::http(404, "Lesson not found"))?;
        lesson.items.push(LessonItem {
            id: Some(lesson_id * 100),
            video_path: Some(format!("videos/{}.mp4", lesson_id)),
            document_path: None,
        });
        self.started.lock().unwrap().push(lesson_id);
        Ok(lesson)
    }
}

/// Purchased courses, history and favorites kept in memory.
#[derive(Default)]
pub(crate) struct FakeLibraryApi {
    pub(crate) enrollments: Vec<Enrollment>,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) favorites: Mutex<Vec<FavoriteCourse>>,
}

impl FakeLibraryApi {
    pub(crate) fn owning(course_ids: &[CourseId]) -> Arc<Self> {
        let enrollments = course_ids
            .iter()
            .enumerate()
            .map(|(index, course_id)| Enrollment {
                id: index as u64 + 1,
                course_id: *course_id,
                course: None,
            })
            .collect();
        Arc::new(Self {
            enrollments,
            ..Self::default()
        })
    }

    pub(crate) fn favorite_ids(&self) -> Vec<CourseId> {
        self.favorites
            .lock()
            .unwrap()
            .iter()
            .map(|favorite| favorite.course_id)
            .collect()
    }
}

#[async_trait::async_trait]
impl LibraryApi for FakeLibraryApi {
    async fn my_courses(&self) -> Result<Vec<Enrollment>> {
        Ok(self.enrollments.clone())
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.history.clone())
    }
}

#[async_trait::async_trait]
impl FavoritesApi for FakeLibraryApi {
    async fn favorite_courses(&self) -> Result<Vec<FavoriteCourse>> {
        Ok(self.favorites.lock().unwrap().clone())
    }

    async fn add_favorite_course(&self, course_id: CourseId) -> Result<()> {
        let mut favorites = self.favorites.lock().unwrap();
        let id = favorites.len() as u64 + 1;
        favorites.push(FavoriteCourse {
            id,
            course_id,
            course: None,
        });
        Ok(())
    }

    async fn remove_favorite_course(&self, course_id: CourseId) -> Result<()> {
        self.favorites
            .lock()
            .unwrap()
            .retain(|favorite| favorite.course_id != course_id);
        Ok(())
    }
}

/// Inbox and conversations kept in memory. Sent messages are recorded.
#[derive(Default)]
pub(crate) struct FakeMessagingApi {
    pub(crate) inbox: Vec<ConversationSummary>,
    pub(crate) pages: Vec<(ConversationId, MessagePage)>,
    pub(crate) sent: Mutex<Vec<OutgoingMessage>>,
    pub(crate) inbox_calls: AtomicUsize,
}

impl FakeMessagingApi {
    pub(crate) fn with_conversation(
        conversation_id: ConversationId,
        other_user_id: UserId,
        texts: &[&str],
    ) -> Arc<Self> {
        let data = texts
            .iter()
            .enumerate()
            .map(|(index, text)| Message {
                id: index as u64 + 1,
                sender_id: Some(other_user_id),
                receiver_id: None,
                message: Some(text.to_string()),
                attachment: None,
                created_at: None,
                sender: None,
            })
            .collect();
        Arc::new(Self {
            inbox: vec![ConversationSummary {
                conversation_id,
                other_user_id: Some(other_user_id),
                other_user_name: Some("Instructor".to_string()),
                last_message: texts.last().map(|text| text.to_string()),
                time: None,
            }],
            pages: vec![(
                conversation_id,
                MessagePage {
                    data,
                    current_page: Some(1),
                    last_page: Some(1),
                },
            )],
            ..Self::default()
        })
    }

    pub(crate) fn sent(&self) -> Vec<OutgoingMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn inbox_calls(&self) -> usize {
        self.inbox_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl MessagingApi for FakeMessagingApi {
    async fn inbox(&self) -> Result<Vec<ConversationSummary>> {
        self.inbox_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.inbox.clone())
    }

    async fn messages(&self, conversation_id: ConversationId, _page: u32) -> Result<MessagePage> {
        self.pages
            .iter()
            .find(|(id, _)| *id == conversation_id)
            .map(|(_, page)| page.clone())
            .ok_or_else(|| AcademyError::http(404, "Conversation not found"))
    }

    async fn send_message(&self, message: &OutgoingMessage) -> Result<Message> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(Message {
            id: 100 + sent.len() as u64,
            sender_id: None,
            receiver_id: Some(message.receiver_id),
            message: Some(message.message.clone()),
            attachment: message
                .attachment
                .as_ref()
                .map(|attachment| format!("attachments/{}", attachment.file_name)),
            created_at: None,
            sender: None,
        })
    }
}
