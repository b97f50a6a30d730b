// Iterator: walk a feed of posts without exposing how they are stored.

use crate::transcript::Transcript;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub content: String,
    pub author: String,
}

impl Post {
    pub fn new(content: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PostCollection {
    posts: Vec<Post>,
}

impl PostCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_post(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn create_iterator(&self) -> PostIterator<'_> {
        PostIterator {
            posts: &self.posts,
            index: 0,
        }
    }
}

pub struct PostIterator<'a> {
    posts: &'a [Post],
    index: usize,
}

impl PostIterator<'_> {
    pub fn has_next(&self) -> bool {
        self.index < self.posts.len()
    }
}

impl<'a> Iterator for PostIterator<'a> {
    type Item = &'a Post;

    fn next(&mut self) -> Option<Self::Item> {
        let post = self.posts.get(self.index)?;
        self.index += 1;
        Some(post)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.posts.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PostIterator<'_> {}

impl<'a> IntoIterator for &'a PostCollection {
    type Item = &'a Post;
    type IntoIter = PostIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.create_iterator()
    }
}

pub fn demo() -> Transcript {
    let mut feed = PostCollection::new();
    for i in 1..=3 {
        feed.add_post(Post::new(format!("Post {i} content"), format!("Author {i}")));
    }

    let mut out = Transcript::new();
    let mut iterator = feed.create_iterator();
    while iterator.has_next() {
        if let Some(post) = iterator.next() {
            out.push(format!("Post: {}, Author: {}", post.content, post.author));
        }
    }
    out
}
