use std::rc::Rc;

use crate::alias::AliasGenerator;
use crate::query_builder::args::{IntoFieldMapping, IntoOnPairs, IntoSource};
use crate::query_builder::ast::{JoinKind, JoinNode, QueryNode, SourceNode};
use crate::query_builder::{Query, WhereQuery};

/// Незавершённый JOIN: левая сторона и тип зафиксированы, условия ещё нет.
/// Продолжить цепочку можно только через `on()` — до тех пор это не узел
/// дерева, так что отрендерить полусобранный JOIN не выйдет.
#[derive(Debug)]
pub struct PendingJoin {
    left: Rc<QueryNode>,
    right: SourceNode,
    kind: JoinKind,
    mapping: Option<Vec<(String, String)>>,
    gen: Rc<AliasGenerator>,
}

impl PendingJoin {
    /// Проекция/переименование полей правой стороны до `on()`:
    /// список имён либо пары `выходное имя → колонка`. Учитывается потом
    /// при разрешении голых полей в проекции и условиях.
    pub fn alias<M: IntoFieldMapping>(mut self, mapping: M) -> Self {
        self.mapping = Some(mapping.into_field_mapping());
        self
    }

    /// Финализация: пары `левое поле = правое поле` дают ON-условие,
    /// стороны склеиваются в составной узел.
    pub fn on<P: IntoOnPairs>(self, pairs: P) -> Query {
        let node = QueryNode::Join(JoinNode {
            left: self.left,
            right: self.right,
            kind: self.kind,
            on: Some(pairs.into_on_pairs()),
            field_mapping: self.mapping,
        });
        Query::new(Rc::new(node), self.gen)
    }
}

pub(crate) fn push_join<T: IntoSource>(
    left: Rc<QueryNode>,
    gen: Rc<AliasGenerator>,
    target: T,
    kind: JoinKind,
) -> PendingJoin {
    let right = target.into_source(&gen);
    PendingJoin {
        left,
        right,
        kind,
        mapping: None,
        gen,
    }
}

impl Query {
    /// INNER JOIN <target>; условие задаётся следом через `on()`.
    pub fn join<T: IntoSource>(self, target: T) -> PendingJoin {
        push_join(self.node, self.gen, target, JoinKind::Inner)
    }

    /// Синоним `join`.
    #[inline]
    pub fn inner_join<T: IntoSource>(self, target: T) -> PendingJoin {
        self.join(target)
    }

    /// LEFT JOIN <target>.
    pub fn left_join<T: IntoSource>(self, target: T) -> PendingJoin {
        push_join(self.node, self.gen, target, JoinKind::Left)
    }
}

impl WhereQuery {
    pub fn join<T: IntoSource>(self, target: T) -> PendingJoin {
        let (node, gen) = self.into_parts();
        push_join(node, gen, target, JoinKind::Inner)
    }

    #[inline]
    pub fn inner_join<T: IntoSource>(self, target: T) -> PendingJoin {
        self.join(target)
    }

    pub fn left_join<T: IntoSource>(self, target: T) -> PendingJoin {
        let (node, gen) = self.into_parts();
        push_join(node, gen, target, JoinKind::Left)
    }
}
