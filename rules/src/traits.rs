use crate::annotation::Annotation;

/// Receives the annotations a rule emits. The rules never read back what they
/// wrote.
pub trait AnnotationSink {
    fn add_annotation(&mut self, annotation: Annotation);
}

impl AnnotationSink for Vec<Annotation> {
    fn add_annotation(&mut self, annotation: Annotation) {
        self.push(annotation);
    }
}
