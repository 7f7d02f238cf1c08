use crate::database;
use crate::post::post_model::{
    CollaboratorView, CreatePostRequest, CreatedPostView, Post, PostTag, PostView,
};
use crate::tag::tag_model::Tag;
use crate::user::model::User;
use crate::utils::error::CustomError;
use crate::utils::tokenizer::{clean_whitespace, insensitive_unique, title_tokenizer};
use chrono::Utc;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, ClientSession, Collection};
use std::collections::HashMap;

pub struct PostService {
    client: Client,
    posts: Collection<Post>,
    tags: Collection<Tag>,
    users: Collection<User>,
}

impl PostService {
    pub fn new(client: &Client) -> Self {
        let db = client.database(&database::database_name());

        PostService {
            client: client.clone(),
            posts: db.collection::<Post>("posts"),
            tags: db.collection::<Tag>("tags"),
            users: db.collection::<User>("users"),
        }
    }

    /// Fetch one post with collaborator summaries and its tag lists
    /// partitioned into explicit and implicit.
    pub async fn get_post(&self, id: &str) -> Result<PostView, CustomError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| CustomError::BadRequestError("Invalid post ID".to_string()))?;

        let post = self
            .posts
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?
            .ok_or_else(|| CustomError::NotFoundError(format!("post \"{}\" not found", id)))?;

        let tag_names = self.resolve_tag_names(&post.tags).await?;
        let (explicit_tags, implicit_tags) = partition_tags(&post.tags, &tag_names);

        let collaborators = self.resolve_collaborator_views(&post.collaborators).await?;

        Ok(PostView {
            post_id: post.id.to_hex(),
            created_date: post.created_date,
            title: post.title,
            body: post.body,
            collaborators,
            explicit_tags,
            implicit_tags,
        })
    }

    /// Create a post with its tag associations inside one transaction:
    /// everything commits together or nothing persists.
    pub async fn create_post(&self, req: CreatePostRequest) -> Result<CreatedPostView, CustomError> {
        let mut session = self
            .client
            .start_session()
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        session
            .start_transaction()
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        let (post, tag_names) = match self.create_post_tx(&mut session, &req).await {
            Ok(created) => created,
            Err(err) => {
                let _ = session.abort_transaction().await;
                return Err(err);
            }
        };

        session
            .commit_transaction()
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        Ok(created_post_view(post, &tag_names))
    }

    async fn create_post_tx(
        &self,
        session: &mut ClientSession,
        req: &CreatePostRequest,
    ) -> Result<(Post, HashMap<ObjectId, String>), CustomError> {
        debug!("process tags");

        let explicit_candidates = req
            .explicit_tags
            .iter()
            .map(|name| (clean_whitespace(name), true));

        let implicit_candidates = title_tokenizer(&req.title)
            .into_iter()
            .map(|token| (clean_whitespace(&token), false));

        // Explicit candidates come first, so the insensitive dedup classifies
        // a shared key as explicit.
        let candidates = insensitive_unique(explicit_candidates.chain(implicit_candidates));

        debug!("get/create tag objects");

        let mut post_tags = Vec::with_capacity(candidates.len());
        let mut tag_names = HashMap::new();

        for (tag_name, is_explicit) in candidates {
            let tag = self.get_or_create_tag(session, &tag_name).await?;
            post_tags.push(PostTag {
                tag_id: tag.id,
                is_explicit,
            });
            tag_names.insert(tag.id, tag.tag);
        }

        debug!("get collaborators");

        // TODO: allow mixed collaborator types (users & teams)
        let mut collaborators = Vec::with_capacity(req.collaborators.len());
        for user_id in &req.collaborators {
            let not_found = || CustomError::NotFoundError(format!("user \"{}\" not found", user_id));

            let object_id = ObjectId::parse_str(user_id).map_err(|_| not_found())?;
            let user = self
                .users
                .find_one(doc! { "_id": object_id })
                .session(&mut *session)
                .await
                .map_err(|e| CustomError::InternalServerError(e.to_string()))?
                .ok_or_else(not_found)?;

            collaborators.push(user.id.ok_or_else(|| {
                CustomError::InternalServerError("Stored user is missing an ID".to_string())
            })?);
        }

        debug!("persist post");

        let post = Post {
            id: ObjectId::new(),
            title: req.title.clone(),
            body: req.body.clone(),
            collaborators,
            tags: post_tags,
            created_date: Utc::now(),
        };

        self.posts
            .insert_one(&post)
            .session(&mut *session)
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        Ok((post, tag_names))
    }

    /// Look up a tag case-insensitively by its normalized key; create it
    /// on the fly, preserving input casing, when no match exists.
    async fn get_or_create_tag(
        &self,
        session: &mut ClientSession,
        tag_name: &str,
    ) -> Result<Tag, CustomError> {
        let key = tag_name.trim().to_lowercase();

        let existing = self
            .tags
            .find_one(doc! { "key": &key })
            .session(&mut *session)
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        if let Some(tag) = existing {
            return Ok(tag);
        }

        let tag = Tag::new(tag_name);
        self.tags
            .insert_one(&tag)
            .session(&mut *session)
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        Ok(tag)
    }

    async fn resolve_tag_names(
        &self,
        post_tags: &[PostTag],
    ) -> Result<HashMap<ObjectId, String>, CustomError> {
        let tag_ids: Vec<ObjectId> = post_tags.iter().map(|pt| pt.tag_id).collect();

        let tags: Vec<Tag> = self
            .tags
            .find(doc! { "_id": { "$in": tag_ids } })
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        Ok(tags.into_iter().map(|tag| (tag.id, tag.tag)).collect())
    }

    async fn resolve_collaborator_views(
        &self,
        collaborator_ids: &[ObjectId],
    ) -> Result<Vec<CollaboratorView>, CustomError> {
        let users: Vec<User> = self
            .users
            .find(doc! { "_id": { "$in": collaborator_ids.to_vec() } })
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| CustomError::InternalServerError(e.to_string()))?;

        let mut by_id: HashMap<ObjectId, User> = users
            .into_iter()
            .filter_map(|user| user.id.map(|id| (id, user)))
            .collect();

        // Preserve the order stored on the post document.
        Ok(collaborator_ids
            .iter()
            .filter_map(|id| by_id.remove(id))
            .map(|user| CollaboratorView {
                user_id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
                username: user.username,
                display_name: user.display_name,
            })
            .collect())
    }
}

/// Build the creation response from the freshly committed post.
fn created_post_view(post: Post, tag_names: &HashMap<ObjectId, String>) -> CreatedPostView {
    let (explicit_tags, implicit_tags) = partition_tags(&post.tags, tag_names);

    CreatedPostView {
        post_id: post.id.to_hex(),
        title: post.title,
        body: post.body,
        collaborators: post.collaborators.iter().map(|id| id.to_hex()).collect(),
        explicit_tags,
        implicit_tags,
    }
}

/// Split a post's tag entries into explicit and implicit name lists,
/// preserving stored order.
fn partition_tags(
    post_tags: &[PostTag],
    tag_names: &HashMap<ObjectId, String>,
) -> (Vec<String>, Vec<String>) {
    let mut explicit_tags = Vec::new();
    let mut implicit_tags = Vec::new();

    for post_tag in post_tags {
        let Some(name) = tag_names.get(&post_tag.tag_id) else {
            continue;
        };
        if post_tag.is_explicit {
            explicit_tags.push(name.clone());
        } else {
            implicit_tags.push(name.clone());
        }
    }

    (explicit_tags, implicit_tags)
}
