use std::collections::BTreeMap;
use std::collections::BTreeSet;

use parking_lot::RwLock;
use tracing::trace;

use crate::Error;
use crate::Model;
use crate::QueryLabel;
use crate::QueryLogger;
use crate::Result;
use crate::StorageError;

/// Thread-safe in-memory collection of `M` documents keyed by id.
///
/// Operations addressed to the model (`insert_one`, `find_one`, ...) are
/// labeled with `M::NAME`. Operations addressed to a document
/// (`update_one`, `delete_one`) are labeled with the document's type name.
#[derive(Debug)]
pub struct Collection<M: Model> {
    documents: RwLock<BTreeMap<u64, M>>,
    logger: QueryLogger,
}

impl<M: Model> Collection<M> {
    pub fn new(logger: QueryLogger) -> Self {
        Self {
            documents: RwLock::new(BTreeMap::new()),
            logger,
        }
    }

    pub fn logger(&self) -> QueryLogger {
        self.logger
    }

    pub fn insert_one(
        &self,
        document: M,
    ) -> Result<M> {
        self.logger.try_run(QueryLabel::for_model::<M>("insert_one"), || {
            let mut documents = self.documents.write();
            let id = document.id();
            if documents.contains_key(&id) {
                return Err(Error::from(StorageError::DuplicateId { model: M::NAME, id }));
            }
            trace!("insert {} id={}", M::NAME, id);
            documents.insert(id, document.clone());
            Ok(document)
        })
    }

    /// All-or-nothing: no document is stored if any id collides.
    pub fn insert_many(
        &self,
        documents: Vec<M>,
    ) -> Result<Vec<M>> {
        self.logger.try_run(QueryLabel::for_model::<M>("insert_many"), || {
            let mut store = self.documents.write();
            let mut seen = BTreeSet::new();
            for document in &documents {
                let id = document.id();
                if store.contains_key(&id) || !seen.insert(id) {
                    return Err(Error::from(StorageError::DuplicateId { model: M::NAME, id }));
                }
            }
            trace!("insert_many {} len={}", M::NAME, documents.len());
            for document in &documents {
                store.insert(document.id(), document.clone());
            }
            Ok(documents)
        })
    }

    pub fn find_one(
        &self,
        id: u64,
    ) -> Option<M> {
        self.logger.run(QueryLabel::for_model::<M>("find_one"), || {
            self.documents.read().get(&id).cloned()
        })
    }

    pub fn find<P>(
        &self,
        predicate: P,
    ) -> Vec<M>
    where
        P: Fn(&M) -> bool,
    {
        self.logger.run(QueryLabel::for_model::<M>("find"), || {
            self.documents.read().values().filter(|d| predicate(d)).cloned().collect()
        })
    }

    /// Document with the lowest id.
    pub fn first(&self) -> Option<M> {
        self.logger.run(QueryLabel::for_model::<M>("first"), || {
            self.documents.read().values().next().cloned()
        })
    }

    /// Document with the highest id.
    pub fn last(&self) -> Option<M> {
        self.logger.run(QueryLabel::for_model::<M>("last"), || {
            self.documents.read().values().next_back().cloned()
        })
    }

    pub fn count(&self) -> usize {
        self.logger.run(QueryLabel::for_model::<M>("count"), || self.documents.read().len())
    }

    /// Returns the number of removed documents.
    pub fn delete_many<P>(
        &self,
        predicate: P,
    ) -> usize
    where
        P: Fn(&M) -> bool,
    {
        self.logger.run(QueryLabel::for_model::<M>("delete_many"), || {
            let mut documents = self.documents.write();
            let before = documents.len();
            documents.retain(|_, d| !predicate(d));
            before - documents.len()
        })
    }

    /// Replaces the stored document that has `document`'s id.
    pub fn update_one(
        &self,
        document: &M,
    ) -> Result<()> {
        self.logger.try_run(QueryLabel::for_instance(document, "update_one"), || {
            let mut documents = self.documents.write();
            let id = document.id();
            match documents.get_mut(&id) {
                Some(stored) => {
                    *stored = document.clone();
                    Ok(())
                }
                None => Err(Error::from(StorageError::NotFound { model: M::NAME, id })),
            }
        })
    }

    pub fn delete_one(
        &self,
        document: &M,
    ) -> Result<()> {
        self.logger.try_run(QueryLabel::for_instance(document, "delete_one"), || {
            let id = document.id();
            match self.documents.write().remove(&id) {
                Some(_) => Ok(()),
                None => Err(Error::from(StorageError::NotFound { model: M::NAME, id })),
            }
        })
    }
}
